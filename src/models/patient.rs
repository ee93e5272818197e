use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};

/// Biological sex used by the Mifflin-St Jeor and Devine equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Activity multiplier applied to RMR.
///
/// Only the four published levels are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum ActivityFactor {
    Rmr,
    Sedentary,
    Active,
    VeryActive,
}

impl ActivityFactor {
    pub const ALL: [ActivityFactor; 4] = [
        ActivityFactor::Rmr,
        ActivityFactor::Sedentary,
        ActivityFactor::Active,
        ActivityFactor::VeryActive,
    ];

    pub fn value(self) -> f64 {
        match self {
            ActivityFactor::Rmr => 1.0,
            ActivityFactor::Sedentary => 1.2,
            ActivityFactor::Active => 1.3,
            ActivityFactor::VeryActive => 1.4,
        }
    }

    /// Match a numeric multiplier against the accepted levels.
    pub fn from_value(value: f64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|af| (af.value() - value).abs() < 1e-9)
            .ok_or_else(|| {
                NutritionError::InvalidInput(format!(
                    "activity factor must be one of 1.0, 1.2, 1.3, 1.4 (got {})",
                    value
                ))
            })
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityFactor::Rmr => "RMR (1.0)",
            ActivityFactor::Sedentary => "Sedentary (1.2)",
            ActivityFactor::Active => "Active (1.3)",
            ActivityFactor::VeryActive => "Very Active (1.4)",
        }
    }
}

impl TryFrom<f64> for ActivityFactor {
    type Error = NutritionError;

    fn try_from(value: f64) -> Result<Self> {
        Self::from_value(value)
    }
}

impl From<ActivityFactor> for f64 {
    fn from(af: ActivityFactor) -> f64 {
        af.value()
    }
}

/// Raw, unvalidated profile as it arrives from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfileInput {
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: u32,
    pub activity_factor: f64,
}

/// Validated anthropometric inputs for one patient.
///
/// Fields are private so a profile can only exist after validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PatientProfileInput", into = "PatientProfileInput")]
pub struct PatientProfile {
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age_years: u32,
    activity_factor: ActivityFactor,
}

impl PatientProfile {
    pub fn new(
        gender: Gender,
        weight_kg: f64,
        height_cm: f64,
        age_years: u32,
        activity_factor: f64,
    ) -> Result<Self> {
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(NutritionError::InvalidInput(format!(
                "weight must be greater than 0 kg (got {})",
                weight_kg
            )));
        }
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(NutritionError::InvalidInput(format!(
                "height must be greater than 0 cm (got {})",
                height_cm
            )));
        }
        if age_years < 1 {
            return Err(NutritionError::InvalidInput(
                "age must be at least 1 year".to_string(),
            ));
        }

        Ok(Self {
            gender,
            weight_kg,
            height_cm,
            age_years,
            activity_factor: ActivityFactor::from_value(activity_factor)?,
        })
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }

    pub fn age_years(&self) -> u32 {
        self.age_years
    }

    pub fn activity_factor(&self) -> ActivityFactor {
        self.activity_factor
    }
}

impl TryFrom<PatientProfileInput> for PatientProfile {
    type Error = NutritionError;

    fn try_from(input: PatientProfileInput) -> Result<Self> {
        Self::new(
            input.gender,
            input.weight_kg,
            input.height_cm,
            input.age_years,
            input.activity_factor,
        )
    }
}

impl From<PatientProfile> for PatientProfileInput {
    fn from(profile: PatientProfile) -> Self {
        Self {
            gender: profile.gender,
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age_years: profile.age_years,
            activity_factor: profile.activity_factor.value(),
        }
    }
}
