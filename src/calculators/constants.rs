// ─────────────────────────────────────────────────────────────────────────────
// BMI classification cut points
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_BELOW: f64 = 24.9;
pub const BMI_OVERWEIGHT_BELOW: f64 = 29.9;
pub const BMI_OBESE_BELOW: f64 = 39.9;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor (1990)
// ─────────────────────────────────────────────────────────────────────────────

pub const MSJ_WEIGHT_COEF: f64 = 10.0;
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
pub const MSJ_AGE_COEF: f64 = 5.0;
pub const MSJ_MALE_OFFSET: f64 = 5.0;
pub const MSJ_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Devine ideal body weight
// ─────────────────────────────────────────────────────────────────────────────

pub const CM_PER_INCH: f64 = 2.54;
pub const DEVINE_BASE_INCHES: f64 = 60.0;
pub const DEVINE_MALE_BASE_KG: f64 = 50.0;
pub const DEVINE_FEMALE_BASE_KG: f64 = 45.5;
pub const DEVINE_KG_PER_INCH: f64 = 2.3;

// ─────────────────────────────────────────────────────────────────────────────
// Ventilator equations
// ─────────────────────────────────────────────────────────────────────────────

/// Penn State 2003b: 0.96*RMR + 31*MV + 167*Tmax - 6212.
pub const PENN_STATE_RMR: f64 = 0.96;
pub const PENN_STATE_MV: f64 = 31.0;
pub const PENN_STATE_TEMP: f64 = 167.0;
pub const PENN_STATE_CONST: f64 = -6212.0;

/// Modified Penn State 2010: 0.71*RMR + 64*MV + 85*Tmax - 3085.
pub const MOD_PENN_STATE_RMR: f64 = 0.71;
pub const MOD_PENN_STATE_MV: f64 = 64.0;
pub const MOD_PENN_STATE_TEMP: f64 = 85.0;
pub const MOD_PENN_STATE_CONST: f64 = -3085.0;

/// Age at which obese ventilated patients switch to Modified Penn State.
pub const PENN_STATE_OLDER_ADULT_AGE: u32 = 60;

// ─────────────────────────────────────────────────────────────────────────────
// Macronutrient energy density
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_G_CARB: f64 = 4.0;
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

/// Floor on daily protein for obese (non-critical) patients.
pub const OBESE_PROTEIN_FLOOR_G: f64 = 65.0;

// ─────────────────────────────────────────────────────────────────────────────
// Ancillary
// ─────────────────────────────────────────────────────────────────────────────

/// Reference albumin (g/dL) for the corrected calcium formula.
pub const CALCIUM_REFERENCE_ALBUMIN: f64 = 4.0;
pub const CALCIUM_ALBUMIN_COEF: f64 = 0.8;

/// Age bands for general fluid needs (years).
pub const FLUID_ADULT_MIN_AGE: u32 = 14;
pub const FLUID_ADULT_MAX_AGE: u32 = 55;
pub const FLUID_OLDER_ADULT_MAX_AGE: u32 = 65;
