use crate::calculators::constants::*;
use crate::models::Range;

/// Serum calcium corrected for albumin (mg/dL).
pub fn corrected_calcium(serum_ca: f64, albumin: f64) -> f64 {
    serum_ca + CALCIUM_ALBUMIN_COEF * (CALCIUM_REFERENCE_ALBUMIN - albumin)
}

/// Daily maintenance fluid (ml) by the Holliday-Segar method.
///
/// 100 ml/kg for the first 10 kg, 50 ml/kg for the next 10 kg,
/// 20 ml/kg for every kg above 20.
///
/// `weight_kg` is not checked; callers pass a validated positive weight.
pub fn holliday_segar_ml(weight_kg: f64) -> f64 {
    let first = weight_kg.min(10.0);
    let second = (weight_kg - 10.0).clamp(0.0, 10.0);
    let rest = (weight_kg - 20.0).max(0.0);
    100.0 * first + 50.0 * second + 20.0 * rest
}

/// General fluid needs by age band (ml/day).
///
/// Takes the weight as given. A non-positive weight yields a non-positive
/// range, so validate it first (as [`PatientProfile::new`] does).
///
/// [`PatientProfile::new`]: crate::models::PatientProfile::new
pub fn general_fluid_needs(age_years: u32, weight_kg: f64) -> Range {
    if (FLUID_ADULT_MIN_AGE..=FLUID_ADULT_MAX_AGE).contains(&age_years) {
        Range::between(
            30.0 * weight_kg,
            35.0 * weight_kg,
            "ml/day",
            "30-35 ml/kg (average healthy adult)",
        )
    } else if age_years > FLUID_ADULT_MAX_AGE && age_years <= FLUID_OLDER_ADULT_MAX_AGE {
        Range::point(30.0 * weight_kg, "ml/day", "30 ml/kg (adults 55-65 years)")
    } else if age_years > FLUID_OLDER_ADULT_MAX_AGE {
        Range::point(25.0 * weight_kg, "ml/day", "25 ml/kg (adults > 65 years)")
    } else {
        Range::point(
            holliday_segar_ml(weight_kg),
            "ml/day",
            "Holliday-Segar: 100 ml/kg to 10 kg, +50 ml/kg 10-20 kg, +20 ml/kg > 20 kg",
        )
    }
}
