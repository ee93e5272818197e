use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{NutritionError, Result};

/// Condition whose published formulas drive the recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiseaseState {
    ArdsVentilated,
    Cancer,
    CerebralVascularDisease,
    Diabetes,
    HeartFailure,
    Liver,
    ObeseNonCritical,
    Pancreatitis,
    Renal,
    SpinalCordInjury,
    Trauma,
    Ventilated,
    WoundHealing,
}

impl DiseaseState {
    /// All conditions in the order they are offered for selection.
    pub const ALL: [DiseaseState; 13] = [
        DiseaseState::ArdsVentilated,
        DiseaseState::Cancer,
        DiseaseState::CerebralVascularDisease,
        DiseaseState::Diabetes,
        DiseaseState::HeartFailure,
        DiseaseState::Liver,
        DiseaseState::ObeseNonCritical,
        DiseaseState::Pancreatitis,
        DiseaseState::Renal,
        DiseaseState::SpinalCordInjury,
        DiseaseState::Trauma,
        DiseaseState::Ventilated,
        DiseaseState::WoundHealing,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            DiseaseState::ArdsVentilated => "ARDS (Acute Lung Injury)/ Ventilated",
            DiseaseState::Cancer => "Cancer",
            DiseaseState::CerebralVascularDisease => "Cerebral vascular disease",
            DiseaseState::Diabetes => "Diabetes",
            DiseaseState::HeartFailure => "Heart failure",
            DiseaseState::Liver => "Liver",
            DiseaseState::ObeseNonCritical => "Obese (non critical care)",
            DiseaseState::Pancreatitis => "Pancreatitis",
            DiseaseState::Renal => "Renal",
            DiseaseState::SpinalCordInjury => "Spinal Cord Injury",
            DiseaseState::Trauma => "Trauma",
            DiseaseState::Ventilated => "Ventilated",
            DiseaseState::WoundHealing => "Wound healing",
        }
    }

    /// Short names accepted on the command line, besides the display name.
    fn aliases(self) -> &'static [&'static str] {
        match self {
            DiseaseState::ArdsVentilated => &["ards", "ards-ventilated", "acute lung injury"],
            DiseaseState::Cancer => &["cancer", "oncology"],
            DiseaseState::CerebralVascularDisease => &["cvd", "stroke", "cerebral-vascular"],
            DiseaseState::Diabetes => &["diabetes", "dm"],
            DiseaseState::HeartFailure => &["heart-failure", "hf", "chf"],
            DiseaseState::Liver => &["liver", "hepatic"],
            DiseaseState::ObeseNonCritical => &["obese", "obesity"],
            DiseaseState::Pancreatitis => &["pancreatitis"],
            DiseaseState::Renal => &["renal", "kidney", "aki"],
            DiseaseState::SpinalCordInjury => &["sci", "spinal-cord-injury"],
            DiseaseState::Trauma => &["trauma"],
            DiseaseState::Ventilated => &["ventilated", "vent"],
            DiseaseState::WoundHealing => &["wound", "wound-healing"],
        }
    }

    /// Closest display names for a misspelled selection, best first.
    pub fn suggestions(input: &str) -> Vec<DiseaseState> {
        let needle = input.trim().to_lowercase();
        let mut scored: Vec<(DiseaseState, f64)> = Self::ALL
            .into_iter()
            .map(|d| {
                let best = std::iter::once(d.display_name().to_lowercase())
                    .chain(d.aliases().iter().map(|a| a.to_string()))
                    .map(|name| jaro_winkler(&name, &needle))
                    .fold(0.0, f64::max);
                (d, best)
            })
            .filter(|(_, score)| *score > 0.7)
            .collect();

        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().map(|(d, _)| d).collect()
    }
}

impl fmt::Display for DiseaseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for DiseaseState {
    type Err = NutritionError;

    fn from_str(s: &str) -> Result<Self> {
        let needle = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|d| {
                d.display_name().to_lowercase() == needle
                    || d.aliases().iter().any(|a| *a == needle)
            })
            .ok_or_else(|| NutritionError::UnsupportedDisease(s.trim().to_string()))
    }
}

/// Level of spinal cord injury.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum SciType {
    Quadriplegic,
    Paraplegic,
}

/// Extra measurement a handler may need beyond the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplementalField {
    MinuteVentilation,
    MaxTemperature,
    SciType,
    Intubated,
}

impl SupplementalField {
    pub fn name(self) -> &'static str {
        match self {
            SupplementalField::MinuteVentilation => "minute_ventilation_l_min",
            SupplementalField::MaxTemperature => "max_temp_c",
            SupplementalField::SciType => "sci_type",
            SupplementalField::Intubated => "intubated",
        }
    }
}

/// Condition-specific measurements collected at the boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SupplementalInputs {
    /// Minute ventilation in L/min.
    pub minute_ventilation_l_min: Option<f64>,
    /// Maximum temperature over the past 24 hours in °C.
    pub max_temp_c: Option<f64>,
    pub sci_type: Option<SciType>,
    pub intubated: Option<bool>,
}

impl SupplementalInputs {
    pub fn has(&self, field: SupplementalField) -> bool {
        match field {
            SupplementalField::MinuteVentilation => self.minute_ventilation_l_min.is_some(),
            SupplementalField::MaxTemperature => self.max_temp_c.is_some(),
            SupplementalField::SciType => self.sci_type.is_some(),
            SupplementalField::Intubated => self.intubated.is_some(),
        }
    }

    /// Reject non-finite or negative measurements among `fields`.
    ///
    /// Readings a handler never uses are not checked.
    pub fn validate(&self, fields: &[SupplementalField]) -> Result<()> {
        for field in fields {
            let value = match field {
                SupplementalField::MinuteVentilation => self.minute_ventilation_l_min,
                SupplementalField::MaxTemperature => self.max_temp_c,
                SupplementalField::SciType | SupplementalField::Intubated => None,
            };
            if let Some(v) = value {
                if !v.is_finite() || v < 0.0 {
                    return Err(NutritionError::InvalidInput(format!(
                        "{} must be a non-negative number (got {})",
                        field.name(),
                        v
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display_name_and_alias() {
        assert_eq!(
            "Heart failure".parse::<DiseaseState>().unwrap(),
            DiseaseState::HeartFailure
        );
        assert_eq!("CHF".parse::<DiseaseState>().unwrap(), DiseaseState::HeartFailure);
        assert_eq!(
            "wound_healing".parse::<DiseaseState>().unwrap(),
            DiseaseState::WoundHealing
        );
    }

    #[test]
    fn test_parse_unknown_is_unsupported() {
        let err = "gout".parse::<DiseaseState>().unwrap_err();
        assert!(matches!(err, NutritionError::UnsupportedDisease(name) if name == "gout"));
    }

    #[test]
    fn test_suggestions_for_typo() {
        let suggestions = DiseaseState::suggestions("pancreatits");
        assert_eq!(suggestions.first(), Some(&DiseaseState::Pancreatitis));
    }

    #[test]
    fn test_validate_rejects_negative_ventilation() {
        let inputs = SupplementalInputs {
            minute_ventilation_l_min: Some(-2.0),
            ..Default::default()
        };
        assert!(inputs.validate(&[SupplementalField::MinuteVentilation]).is_err());
        assert!(inputs.validate(&[SupplementalField::SciType]).is_ok());
    }
}
