use serde::{Deserialize, Serialize};

use crate::models::DiseaseState;

/// How the bounds of a [`Range`] should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeKind {
    /// `low` to `high`, inclusive.
    Between,
    /// A single target; `low == high`.
    Point,
    /// `low` and above.
    AtLeast,
    /// Up to `high`.
    UpTo,
}

/// A numeric target with its unit and the formula it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub low: f64,
    pub high: f64,
    pub kind: RangeKind,
    pub unit: String,
    pub basis: String,
}

impl Range {
    pub fn between(low: f64, high: f64, unit: &str, basis: &str) -> Self {
        Self {
            label: None,
            low,
            high,
            kind: RangeKind::Between,
            unit: unit.to_string(),
            basis: basis.to_string(),
        }
    }

    pub fn point(value: f64, unit: &str, basis: &str) -> Self {
        Self {
            kind: RangeKind::Point,
            ..Self::between(value, value, unit, basis)
        }
    }

    pub fn at_least(value: f64, unit: &str, basis: &str) -> Self {
        Self {
            kind: RangeKind::AtLeast,
            ..Self::between(value, value, unit, basis)
        }
    }

    pub fn up_to(value: f64, unit: &str, basis: &str) -> Self {
        Self {
            kind: RangeKind::UpTo,
            ..Self::between(value, value, unit, basis)
        }
    }

    /// Attach a short label such as "Hemodialysis" or "Acute phase".
    pub fn labeled(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Human-readable amount, e.g. `1750 - 2100 kcal/day`.
    pub fn display_amount(&self, decimals: usize) -> String {
        match self.kind {
            RangeKind::Between => format!(
                "{:.*} - {:.*} {}",
                decimals, self.low, decimals, self.high, self.unit
            ),
            RangeKind::Point => format!("{:.*} {}", decimals, self.low, self.unit),
            RangeKind::AtLeast => format!("{:.*}+ {}", decimals, self.low, self.unit),
            RangeKind::UpTo => format!("up to {:.*} {}", decimals, self.high, self.unit),
        }
    }
}

/// Micronutrient or electrolyte guidance, optionally with an amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub nutrient: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Range>,
    pub guidance: String,
}

impl Note {
    pub fn new(nutrient: &str, amount: Option<Range>, guidance: &str) -> Self {
        Self {
            nutrient: nutrient.to_string(),
            amount,
            guidance: guidance.to_string(),
        }
    }
}

/// Everything a disease handler recommends for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecommendationSet {
    pub disease: DiseaseState,
    pub energy: Vec<Range>,
    pub protein: Vec<Range>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub carbohydrate: Vec<Range>,
    pub fluid: Option<Range>,
    pub micronutrients: Vec<Note>,
    pub rationale_notes: Vec<String>,
}

impl NutritionRecommendationSet {
    pub fn new(disease: DiseaseState) -> Self {
        Self {
            disease,
            energy: Vec::new(),
            protein: Vec::new(),
            carbohydrate: Vec::new(),
            fluid: None,
            micronutrients: Vec::new(),
            rationale_notes: Vec::new(),
        }
    }

    pub fn note(&mut self, text: &str) {
        self.rationale_notes.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_range_has_equal_bounds() {
        let r = Range::point(1750.0, "kcal/day", "25 kcal/kg");
        assert_eq!(r.kind, RangeKind::Point);
        assert_eq!(r.low, r.high);
    }

    #[test]
    fn test_display_amount() {
        let r = Range::between(1750.0, 2100.0, "kcal/day", "25-30 kcal/kg");
        assert_eq!(r.display_amount(0), "1750 - 2100 kcal/day");

        let r = Range::up_to(175.0, "g/day", "2.5 g/kg").labeled("CRRT");
        assert_eq!(r.display_amount(0), "up to 175 g/day");
        assert_eq!(r.label.as_deref(), Some("CRRT"));

        let r = Range::at_least(2450.0, "kcal/day", "35 kcal/kg");
        assert_eq!(r.display_amount(0), "2450+ kcal/day");
    }
}
