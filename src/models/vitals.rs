use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculators::{classify_bmi, compute_bmi, compute_ibw, compute_rmr, compute_tdee};
use crate::error::Result;
use crate::models::PatientProfile;

/// Body-mass classification used across the disease handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
    MorbidlyObese,
}

impl fmt::Display for BmiClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BmiClass::Underweight => "Underweight",
            BmiClass::Normal => "Normal weight",
            BmiClass::Overweight => "Overweight",
            BmiClass::Obese => "Obese",
            BmiClass::MorbidlyObese => "Morbidly Obese",
        };
        f.write_str(name)
    }
}

/// Baseline values derived once from a [`PatientProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedVitals {
    pub bmi: f64,
    pub bmi_class: BmiClass,
    pub rmr_kcal: f64,
    pub tdee_kcal: f64,
    pub ibw_kg: f64,
}

impl DerivedVitals {
    pub fn compute(profile: &PatientProfile) -> Result<Self> {
        let bmi = compute_bmi(profile.weight_kg(), profile.height_cm())?;
        let rmr_kcal = compute_rmr(
            profile.weight_kg(),
            profile.height_cm(),
            profile.age_years(),
            profile.gender(),
        );
        let tdee_kcal = compute_tdee(rmr_kcal, profile.activity_factor().value())?;
        let ibw_kg = compute_ibw(profile.height_cm(), profile.gender());

        if ibw_kg <= 0.0 {
            warn!(
                height_cm = profile.height_cm(),
                ibw_kg, "Devine IBW is non-positive for this stature"
            );
        }

        Ok(Self {
            bmi,
            bmi_class: classify_bmi(bmi),
            rmr_kcal,
            tdee_kcal,
            ibw_kg,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_compute_reference_male() {
        let profile = PatientProfile::new(Gender::Male, 70.0, 175.0, 30, 1.2).unwrap();
        let vitals = DerivedVitals::compute(&profile).unwrap();

        assert!((vitals.rmr_kcal - 1648.75).abs() < 1e-9);
        assert!((vitals.tdee_kcal - 1648.75 * 1.2).abs() < 1e-9);
        assert!((vitals.bmi - 70.0 / (1.75 * 1.75)).abs() < 1e-9);
        assert_eq!(vitals.bmi_class, BmiClass::Normal);
    }

    #[test]
    fn test_compute_is_repeatable() {
        let profile = PatientProfile::new(Gender::Female, 95.0, 160.0, 52, 1.3).unwrap();
        let a = DerivedVitals::compute(&profile).unwrap();
        let b = DerivedVitals::compute(&profile).unwrap();
        assert_eq!(a, b);
    }
}
