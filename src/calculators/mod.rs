pub mod ancillary;
pub mod anthropometric;
pub mod constants;
pub mod energy;

pub use ancillary::{corrected_calcium, general_fluid_needs, holliday_segar_ml};
pub use anthropometric::{classify_bmi, compute_bmi, compute_ibw};
pub use energy::{compute_rmr, compute_tdee, modified_penn_state_kcal, penn_state_kcal};
