use crate::calculators::constants::*;
use crate::error::Result;
use crate::models::{ActivityFactor, Gender};

/// Resting metabolic rate (kcal/day) by Mifflin-St Jeor.
///
/// `10*weight + 6.25*height - 5*age + 5` for men, `- 161` for women.
pub fn compute_rmr(weight_kg: f64, height_cm: f64, age_years: u32, gender: Gender) -> f64 {
    let offset = match gender {
        Gender::Male => MSJ_MALE_OFFSET,
        Gender::Female => MSJ_FEMALE_OFFSET,
    };
    MSJ_WEIGHT_COEF * weight_kg + MSJ_HEIGHT_COEF * height_cm - MSJ_AGE_COEF * age_years as f64
        + offset
}

/// Total daily energy expenditure.
///
/// `activity_factor` must be one of 1.0, 1.2, 1.3 or 1.4.
pub fn compute_tdee(rmr_kcal: f64, activity_factor: f64) -> Result<f64> {
    let af = ActivityFactor::from_value(activity_factor)?;
    Ok(rmr_kcal * af.value())
}

/// Penn State equation for mechanically ventilated, non-obese adults.
pub fn penn_state_kcal(rmr_kcal: f64, minute_vent_l_min: f64, max_temp_c: f64) -> f64 {
    PENN_STATE_RMR * rmr_kcal
        + PENN_STATE_MV * minute_vent_l_min
        + PENN_STATE_TEMP * max_temp_c
        + PENN_STATE_CONST
}

/// Modified Penn State equation for obese ventilated adults aged 60 and over.
pub fn modified_penn_state_kcal(rmr_kcal: f64, minute_vent_l_min: f64, max_temp_c: f64) -> f64 {
    MOD_PENN_STATE_RMR * rmr_kcal
        + MOD_PENN_STATE_MV * minute_vent_l_min
        + MOD_PENN_STATE_TEMP * max_temp_c
        + MOD_PENN_STATE_CONST
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rmr_male_reference() {
        // 700 + 1093.75 - 150 + 5
        assert!((compute_rmr(70.0, 175.0, 30, Gender::Male) - 1648.75).abs() < 1e-9);
    }

    #[test]
    fn test_rmr_gender_offset() {
        let male = compute_rmr(60.0, 165.0, 40, Gender::Male);
        let female = compute_rmr(60.0, 165.0, 40, Gender::Female);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_penn_state_equations() {
        let expected = 0.96 * 1800.0 + 31.0 * 8.0 + 167.0 * 38.0 - 6212.0;
        assert!((penn_state_kcal(1800.0, 8.0, 38.0) - expected).abs() < 1e-9);

        let expected = 0.71 * 1800.0 + 64.0 * 8.0 + 85.0 * 38.0 - 3085.0;
        assert!((modified_penn_state_kcal(1800.0, 8.0, 38.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_rejects_unlisted_factor() {
        assert!(compute_tdee(1500.0, 1.25).is_err());
        assert!((compute_tdee(1500.0, 1.4).unwrap() - 2100.0).abs() < 1e-9);
    }
}
