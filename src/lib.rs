pub mod calculators;
pub mod cli;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod storage;

pub use engine::{recommend, required_supplemental};
pub use error::{NutritionError, Result};
pub use models::{
    DerivedVitals, DiseaseState, NutritionRecommendationSet, PatientProfile, SupplementalInputs,
};
