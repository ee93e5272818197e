//! Disease-state rule engine.
//!
//! [`recommend`] checks the supplemental inputs the selected condition needs
//! for this patient, then runs exactly one condition handler. Handlers are
//! pure: the same inputs always give the same recommendation set.

mod critical_care;
mod metabolic;
mod organ;

use tracing::info;

use crate::calculators::constants::PENN_STATE_OLDER_ADULT_AGE;
use crate::error::{NutritionError, Result};
use crate::models::{
    DerivedVitals, DiseaseState, NutritionRecommendationSet, PatientProfile, Range, SciType,
    SupplementalField, SupplementalInputs,
};

/// Read-only inputs shared by every handler.
pub(crate) struct HandlerContext<'a> {
    pub disease: DiseaseState,
    pub profile: &'a PatientProfile,
    pub vitals: &'a DerivedVitals,
    pub supplemental: &'a SupplementalInputs,
}

impl HandlerContext<'_> {
    pub fn weight(&self) -> f64 {
        self.profile.weight_kg()
    }

    pub fn bmi(&self) -> f64 {
        self.vitals.bmi
    }

    fn missing(&self, field: SupplementalField) -> NutritionError {
        NutritionError::MissingSupplementalInput {
            disease: self.disease,
            field: field.name(),
        }
    }

    /// Minute ventilation and max temperature, both required together.
    pub fn ventilator_inputs(&self) -> Result<(f64, f64)> {
        let mv = self
            .supplemental
            .minute_ventilation_l_min
            .ok_or_else(|| self.missing(SupplementalField::MinuteVentilation))?;
        let temp = self
            .supplemental
            .max_temp_c
            .ok_or_else(|| self.missing(SupplementalField::MaxTemperature))?;
        Ok((mv, temp))
    }

    pub fn sci_type(&self) -> Result<SciType> {
        self.supplemental
            .sci_type
            .ok_or_else(|| self.missing(SupplementalField::SciType))
    }

    pub fn intubated(&self) -> Result<bool> {
        self.supplemental
            .intubated
            .ok_or_else(|| self.missing(SupplementalField::Intubated))
    }

    /// `low`-`high` per kg of actual body weight.
    pub fn per_kg(&self, low: f64, high: f64, unit: &str, basis: &str) -> Range {
        Range::between(low * self.weight(), high * self.weight(), unit, basis)
    }

    /// A single per-kg target on actual body weight.
    pub fn per_kg_point(&self, factor: f64, unit: &str, basis: &str) -> Range {
        Range::point(factor * self.weight(), unit, basis)
    }
}

/// Supplemental fields `disease` needs for this patient.
///
/// ARDS only needs ventilator readings on the Penn State branches
/// (BMI < 30, or age 60 and over).
pub fn required_supplemental(
    disease: DiseaseState,
    profile: &PatientProfile,
    vitals: &DerivedVitals,
) -> Vec<SupplementalField> {
    match disease {
        DiseaseState::ArdsVentilated
            if vitals.bmi < 30.0 || profile.age_years() >= PENN_STATE_OLDER_ADULT_AGE =>
        {
            vec![
                SupplementalField::MinuteVentilation,
                SupplementalField::MaxTemperature,
            ]
        }
        DiseaseState::SpinalCordInjury => vec![SupplementalField::SciType],
        DiseaseState::Trauma => vec![SupplementalField::Intubated],
        _ => Vec::new(),
    }
}

/// Compute the nutrition recommendation set for one patient and condition.
///
/// # Errors
///
/// `MissingSupplementalInput` when a required field is absent, and
/// `InvalidInput` when a required measurement is negative or non-finite.
/// Supplied fields the handler does not use are ignored.
pub fn recommend(
    profile: &PatientProfile,
    vitals: &DerivedVitals,
    disease: DiseaseState,
    supplemental: &SupplementalInputs,
) -> Result<NutritionRecommendationSet> {
    let required = required_supplemental(disease, profile, vitals);
    supplemental.validate(&required)?;

    if let Some(field) = required.into_iter().find(|f| !supplemental.has(*f)) {
        return Err(NutritionError::MissingSupplementalInput {
            disease,
            field: field.name(),
        });
    }

    info!(%disease, bmi = vitals.bmi, age = profile.age_years(), "computing recommendations");

    let ctx = HandlerContext {
        disease,
        profile,
        vitals,
        supplemental,
    };

    match disease {
        DiseaseState::ArdsVentilated => critical_care::ards(&ctx),
        DiseaseState::Cancer => Ok(metabolic::cancer(&ctx)),
        DiseaseState::CerebralVascularDisease => Ok(organ::cerebral_vascular(&ctx)),
        DiseaseState::Diabetes => Ok(metabolic::diabetes(&ctx)),
        DiseaseState::HeartFailure => Ok(organ::heart_failure(&ctx)),
        DiseaseState::Liver => Ok(organ::liver(&ctx)),
        DiseaseState::ObeseNonCritical => Ok(metabolic::obese_non_critical(&ctx)),
        DiseaseState::Pancreatitis => Ok(organ::pancreatitis(&ctx)),
        DiseaseState::Renal => Ok(organ::renal(&ctx)),
        DiseaseState::SpinalCordInjury => critical_care::spinal_cord_injury(&ctx),
        DiseaseState::Trauma => critical_care::trauma(&ctx),
        DiseaseState::Ventilated => Ok(critical_care::ventilated(&ctx)),
        DiseaseState::WoundHealing => Ok(metabolic::wound_healing(&ctx)),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::models::{DerivedVitals, Gender, PatientProfile};

    /// Profile with a target BMI at 170 cm.
    pub fn patient_with_bmi(bmi: f64, age: u32, gender: Gender) -> (PatientProfile, DerivedVitals) {
        let weight = bmi * 1.7 * 1.7;
        let profile = PatientProfile::new(gender, weight, 170.0, age, 1.2).unwrap();
        let vitals = DerivedVitals::compute(&profile).unwrap();
        (profile, vitals)
    }

    /// Male profile at 100 cm, where BMI equals weight exactly.
    pub fn patient_at_100cm(bmi: f64, age: u32) -> (PatientProfile, DerivedVitals) {
        let profile = PatientProfile::new(Gender::Male, bmi, 100.0, age, 1.0).unwrap();
        let vitals = DerivedVitals::compute(&profile).unwrap();
        (profile, vitals)
    }
}
