use dialoguer::{Confirm, Input, Select};

use crate::error::{NutritionError, Result};
use crate::models::{
    ActivityFactor, DiseaseState, Gender, PatientProfile, SciType, SupplementalField,
    SupplementalInputs,
};

/// Prompt for a number, rejecting anything that does not parse.
fn prompt_number(prompt: &str, default: &str) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutritionError::InvalidInput(format!("Invalid number: {}", input)))
}

pub fn prompt_gender() -> Result<Gender> {
    let selection = Select::new()
        .with_prompt("Select gender")
        .items(&["Male", "Female"])
        .default(0)
        .interact()?;

    Ok(if selection == 0 {
        Gender::Male
    } else {
        Gender::Female
    })
}

pub fn prompt_activity_factor() -> Result<ActivityFactor> {
    let labels: Vec<&str> = ActivityFactor::ALL.iter().map(|af| af.label()).collect();
    let selection = Select::new()
        .with_prompt("Select activity level")
        .items(&labels)
        .default(1)
        .interact()?;

    Ok(ActivityFactor::ALL[selection])
}

pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Enter age (years)")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| NutritionError::InvalidInput(format!("Invalid age: {}", input)))
}

/// Collect and validate the anthropometric profile.
pub fn collect_patient_profile() -> Result<PatientProfile> {
    let gender = prompt_gender()?;
    let weight = prompt_number("Enter weight (kg)", "70")?;
    let height = prompt_number("Enter height (cm)", "170")?;
    let activity = prompt_activity_factor()?;
    let age = prompt_age()?;

    PatientProfile::new(gender, weight, height, age, activity.value())
}

pub fn prompt_disease() -> Result<DiseaseState> {
    let names: Vec<&str> = DiseaseState::ALL.iter().map(|d| d.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Select disease state")
        .items(&names)
        .default(0)
        .interact()?;

    Ok(DiseaseState::ALL[selection])
}

/// Ask for exactly the supplemental fields the handler needs.
pub fn prompt_supplemental(fields: &[SupplementalField]) -> Result<SupplementalInputs> {
    let mut inputs = SupplementalInputs::default();

    for field in fields {
        match field {
            SupplementalField::MinuteVentilation => {
                inputs.minute_ventilation_l_min =
                    Some(prompt_number("Enter minute ventilation (L/min)", "8")?);
            }
            SupplementalField::MaxTemperature => {
                inputs.max_temp_c = Some(prompt_number(
                    "Enter max temperature in past 24 hrs (°C)",
                    "37",
                )?);
            }
            SupplementalField::SciType => {
                let selection = Select::new()
                    .with_prompt("Select SCI type")
                    .items(&["Quadriplegic", "Paraplegic"])
                    .default(0)
                    .interact()?;
                inputs.sci_type = Some(if selection == 0 {
                    SciType::Quadriplegic
                } else {
                    SciType::Paraplegic
                });
            }
            SupplementalField::Intubated => {
                inputs.intubated = Some(prompt_yes_no("Is the patient intubated?", true)?);
            }
        }
    }

    Ok(inputs)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
