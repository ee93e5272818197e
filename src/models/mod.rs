mod disease;
mod patient;
mod recommendation;
mod vitals;

pub use disease::{DiseaseState, SciType, SupplementalField, SupplementalInputs};
pub use patient::{ActivityFactor, Gender, PatientProfile, PatientProfileInput};
pub use recommendation::{Note, NutritionRecommendationSet, Range, RangeKind};
pub use vitals::{BmiClass, DerivedVitals};
