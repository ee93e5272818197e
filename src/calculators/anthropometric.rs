use crate::calculators::constants::*;
use crate::error::{NutritionError, Result};
use crate::models::{BmiClass, Gender};

/// Body mass index from kilograms and centimeters.
///
/// Non-positive height or weight is an error rather than a zero BMI.
pub fn compute_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "height must be greater than 0 cm (got {})",
            height_cm
        )));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "weight must be greater than 0 kg (got {})",
            weight_kg
        )));
    }

    let height_m = height_cm / 100.0;
    Ok(weight_kg / (height_m * height_m))
}

/// Classify a BMI value.
///
/// Each band is upper-exclusive: 24.9 is Overweight, 29.9 is Obese,
/// 39.9 is Morbidly Obese.
pub fn classify_bmi(bmi: f64) -> BmiClass {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiClass::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiClass::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiClass::Overweight
    } else if bmi < BMI_OBESE_BELOW {
        BmiClass::Obese
    } else {
        BmiClass::MorbidlyObese
    }
}

/// Ideal body weight by the Devine equation.
///
/// Not clamped: statures under about 152 cm (male) or 137 cm (female)
/// give a non-positive result.
pub fn compute_ibw(height_cm: f64, gender: Gender) -> f64 {
    let inches = height_cm / CM_PER_INCH;
    let base = match gender {
        Gender::Male => DEVINE_MALE_BASE_KG,
        Gender::Female => DEVINE_FEMALE_BASE_KG,
    };
    base + DEVINE_KG_PER_INCH * (inches - DEVINE_BASE_INCHES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_zero_height_is_error() {
        assert!(matches!(
            compute_bmi(70.0, 0.0),
            Err(NutritionError::InvalidInput(_))
        ));
        assert!(compute_bmi(70.0, -10.0).is_err());
    }

    #[test]
    fn test_bmi_value() {
        let bmi = compute_bmi(80.0, 200.0).unwrap();
        assert!((bmi - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(classify_bmi(18.49), BmiClass::Underweight);
        assert_eq!(classify_bmi(18.5), BmiClass::Normal);
        assert_eq!(classify_bmi(24.89), BmiClass::Normal);
        assert_eq!(classify_bmi(24.9), BmiClass::Overweight);
        assert_eq!(classify_bmi(24.95), BmiClass::Overweight);
        assert_eq!(classify_bmi(25.0), BmiClass::Overweight);
        assert_eq!(classify_bmi(29.9), BmiClass::Obese);
        assert_eq!(classify_bmi(30.0), BmiClass::Obese);
        assert_eq!(classify_bmi(39.89), BmiClass::Obese);
        assert_eq!(classify_bmi(39.9), BmiClass::MorbidlyObese);
        assert_eq!(classify_bmi(55.0), BmiClass::MorbidlyObese);
    }

    #[test]
    fn test_ibw_devine() {
        assert!((compute_ibw(180.0, Gender::Male) - 75.0).abs() < 0.1);
        // 152.4 cm is exactly 60 inches
        assert!((compute_ibw(152.4, Gender::Female) - 45.5).abs() < 1e-9);
    }

    #[test]
    fn test_ibw_short_stature_not_clamped() {
        assert!(compute_ibw(100.0, Gender::Female) < 0.0);
    }
}
