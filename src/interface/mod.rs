pub mod prompts;
pub mod render;

pub use prompts::{
    collect_patient_profile, prompt_activity_factor, prompt_age, prompt_disease, prompt_gender,
    prompt_supplemental, prompt_yes_no,
};
pub use render::{
    display_corrected_calcium, display_disease_list, display_fluid_needs,
    display_recommendations, display_vitals,
};
