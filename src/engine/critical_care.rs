use tracing::debug;

use crate::calculators::constants::PENN_STATE_OLDER_ADULT_AGE;
use crate::calculators::{modified_penn_state_kcal, penn_state_kcal};
use crate::engine::HandlerContext;
use crate::error::Result;
use crate::models::{DiseaseState, Note, NutritionRecommendationSet, Range, SciType};

const MODIFIED_PENN_STATE_BASIS: &str = "Modified Penn State: 0.71*RMR + 64*MV + 85*Tmax - 3085";

/// ARDS / acute lung injury on the ventilator.
pub(crate) fn ards(ctx: &HandlerContext) -> Result<NutritionRecommendationSet> {
    let mut set = NutritionRecommendationSet::new(DiseaseState::ArdsVentilated);
    let bmi = ctx.bmi();
    let rmr = ctx.vitals.rmr_kcal;
    let older = ctx.profile.age_years() >= PENN_STATE_OLDER_ADULT_AGE;

    if bmi < 30.0 {
        debug!(bmi, "ARDS energy: Penn State (non-obese)");
        let (mv, temp) = ctx.ventilator_inputs()?;
        set.energy.push(Range::point(
            penn_state_kcal(rmr, mv, temp),
            "kcal/day",
            "Penn State: 0.96*RMR + 31*MV + 167*Tmax - 6212",
        ));
        set.note("Non-obese patient: Penn State equation.");
    } else if bmi < 50.0 {
        if older {
            debug!(bmi, "ARDS energy: Modified Penn State (obese, age >= 60)");
            let (mv, temp) = ctx.ventilator_inputs()?;
            set.energy.push(Range::point(
                modified_penn_state_kcal(rmr, mv, temp),
                "kcal/day",
                MODIFIED_PENN_STATE_BASIS,
            ));
            set.note("Obese patient aged 60 or over: Modified Penn State equation.");
        } else {
            debug!(bmi, "ARDS energy: 11-14 kcal/kg (obese, age < 60)");
            set.energy.push(ctx.per_kg(
                11.0,
                14.0,
                "kcal/day",
                "11-14 kcal/kg actual body weight (ASPEN, BMI 30-50)",
            ));
            set.note("Obese patient under 60: ASPEN guidelines.");
        }
    } else if older {
        debug!(bmi, "ARDS energy: Modified Penn State (BMI >= 50, age >= 60)");
        let (mv, temp) = ctx.ventilator_inputs()?;
        set.energy.push(Range::point(
            modified_penn_state_kcal(rmr, mv, temp),
            "kcal/day",
            MODIFIED_PENN_STATE_BASIS,
        ));
        set.note("Obese patient aged 60 or over: Modified Penn State equation.");
    } else {
        debug!(bmi, "ARDS energy: 22-25 kcal/kg (BMI >= 50, age < 60)");
        set.energy.push(ctx.per_kg(
            22.0,
            25.0,
            "kcal/day",
            "22-25 kcal/kg actual body weight (ASPEN, BMI > 50)",
        ));
        set.note("BMI 50 or above and under 60: ASPEN guidelines.");
    }

    let ibw = ctx.vitals.ibw_kg;
    if (30.0..39.9).contains(&bmi) {
        set.protein
            .push(Range::point(2.0 * ibw, "g/day", "2 g/kg ideal body weight"));
    } else if bmi >= 40.0 {
        set.protein.push(Range::between(
            2.2 * ibw,
            2.5 * ibw,
            "g/day",
            "2.2-2.5 g/kg ideal body weight",
        ));
    } else {
        set.protein
            .push(ctx.per_kg(1.2, 1.5, "g/day", "1.2-1.5 g/kg actual body weight"));
    }

    Ok(set)
}

/// Ventilated patients with obesity.
///
/// No energy rule applies below BMI 30.
pub(crate) fn ventilated(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::Ventilated);
    let bmi = ctx.bmi();

    if (30.0..=50.0).contains(&bmi) {
        set.energy.push(ctx.per_kg(
            11.0,
            14.0,
            "kcal/day",
            "11-14 kcal/kg actual body weight (BMI 30-50)",
        ));
    } else if bmi > 50.0 {
        let ideal_bw = 22.0 * (ctx.profile.height_cm() - 100.0);
        debug!(bmi, ideal_bw, "ventilated energy on approximated IBW");
        set.energy.push(Range::between(
            22.0 * ideal_bw,
            25.0 * ideal_bw,
            "kcal/day",
            "22-25 kcal/kg IBW, IBW approximated as 22*(height_cm - 100)",
        ));
    } else {
        set.note("BMI below 30: no obesity-specific energy rule applies.");
    }

    if (30.0..=40.0).contains(&bmi) {
        set.protein
            .push(ctx.per_kg_point(2.0, "g/day", "2 g/kg actual body weight (BMI 30-40)"));
    } else if bmi > 40.0 {
        set.protein
            .push(ctx.per_kg_point(2.5, "g/day", "2.5 g/kg actual body weight (BMI > 40)"));
    }

    set.note("Parenteral nutrition: start at 80% of estimated energy needs, advance to goal as the patient stabilizes.");
    set.note("24-hour urine nitrogen balance suggested for further monitoring.");
    set
}

/// Spinal cord injury; energy depends on the level of injury.
pub(crate) fn spinal_cord_injury(ctx: &HandlerContext) -> Result<NutritionRecommendationSet> {
    let mut set = NutritionRecommendationSet::new(DiseaseState::SpinalCordInjury);

    match ctx.sci_type()? {
        SciType::Quadriplegic => set.energy.push(
            ctx.per_kg(20.0, 23.0, "kcal/day", "20-23 kcal/kg")
                .labeled("Quadriplegic"),
        ),
        SciType::Paraplegic => set.energy.push(
            ctx.per_kg_point(27.0, "kcal/day", "27 kcal/kg")
                .labeled("Paraplegic"),
        ),
    }

    set.protein.push(
        ctx.per_kg(1.5, 2.0, "g/day", "1.5-2.0 g/kg")
            .labeled("Acute phase (immediately following SCI)"),
    );
    set.protein.push(
        ctx.per_kg(0.8, 1.0, "g/day", "0.8-1.0 g/kg")
            .labeled("Chronic phase (long term)"),
    );
    set.note("Investigate for skin breakdown and intervene, especially in the acute phase.");
    Ok(set)
}

/// Trauma, including traumatic brain injury guidance.
pub(crate) fn trauma(ctx: &HandlerContext) -> Result<NutritionRecommendationSet> {
    let mut set = NutritionRecommendationSet::new(DiseaseState::Trauma);

    if ctx.intubated()? {
        set.energy.push(
            ctx.per_kg(20.0, 25.0, "kcal/day", "20-25 kcal/kg")
                .labeled("Intubated"),
        );
    } else {
        set.energy.push(
            ctx.per_kg(25.0, 35.0, "kcal/day", "25-35 kcal/kg")
                .labeled("Non-intubated"),
        );
    }

    let rmr = ctx.vitals.rmr_kcal;
    set.energy.push(
        Range::between(
            1.2 * rmr,
            1.6 * rmr,
            "kcal/day",
            "120-160% of basal energy needs",
        )
        .labeled("Traumatic brain injury"),
    );

    set.protein
        .push(ctx.per_kg(1.5, 2.0, "g/day", "1.5-2.0 g/kg"));

    for (nutrient, dose, unit) in [
        ("Vitamin C", 1000.0, "mg/day"),
        ("Vitamin E", 1000.0, "IU/day"),
        ("Selenium", 200.0, "mcg/day"),
    ] {
        set.micronutrients.push(Note::new(
            nutrient,
            Some(Range::point(dose, unit, "trauma recovery repletion")),
            "for 7 days",
        ));
    }

    set.note("Traumatic brain injury: same 1.5-2.0 g/kg protein range.");
    set.note("Tube feeding phase (day 1 to 7): provide nutrition by tube feeding, transition to standard feeding after 7 days.");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use crate::engine::recommend;
    use crate::engine::test_support::{patient_at_100cm, patient_with_bmi};
    use crate::models::{Gender, RangeKind, SciType, SupplementalInputs};
    use crate::models::DiseaseState;

    fn vent(mv: f64, temp: f64) -> SupplementalInputs {
        SupplementalInputs {
            minute_ventilation_l_min: Some(mv),
            max_temp_c: Some(temp),
            ..Default::default()
        }
    }

    #[test]
    fn test_ards_obese_older_uses_modified_penn_state() {
        let (profile, vitals) = patient_with_bmi(32.0, 65, Gender::Male);
        let set = recommend(&profile, &vitals, DiseaseState::ArdsVentilated, &vent(8.0, 38.0))
            .unwrap();

        let expected = 0.71 * vitals.rmr_kcal + 64.0 * 8.0 + 85.0 * 38.0 - 3085.0;
        assert_eq!(set.energy.len(), 1);
        assert!((set.energy[0].low - expected).abs() < 1e-9);

        // 2 g/kg IBW for 30 <= BMI < 39.9
        assert!((set.protein[0].low - 2.0 * vitals.ibw_kg).abs() < 1e-9);
    }

    #[test]
    fn test_ards_non_obese_uses_penn_state() {
        let (profile, vitals) = patient_with_bmi(22.0, 40, Gender::Female);
        let set = recommend(&profile, &vitals, DiseaseState::ArdsVentilated, &vent(10.0, 37.0))
            .unwrap();

        let expected = 0.96 * vitals.rmr_kcal + 31.0 * 10.0 + 167.0 * 37.0 - 6212.0;
        assert!((set.energy[0].low - expected).abs() < 1e-9);
        assert!((set.protein[0].low - 1.2 * profile.weight_kg()).abs() < 1e-9);
        assert!((set.protein[0].high - 1.5 * profile.weight_kg()).abs() < 1e-9);
    }

    #[test]
    fn test_ards_super_obese_younger() {
        let (profile, vitals) = patient_with_bmi(52.0, 45, Gender::Male);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::ArdsVentilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert!((set.energy[0].low - 22.0 * profile.weight_kg()).abs() < 1e-9);
        assert!((set.energy[0].high - 25.0 * profile.weight_kg()).abs() < 1e-9);
        assert!((set.protein[0].low - 2.2 * vitals.ibw_kg).abs() < 1e-9);
    }

    #[test]
    fn test_ards_protein_gap_between_39_9_and_40() {
        let (profile, vitals) = patient_with_bmi(39.95, 45, Gender::Male);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::ArdsVentilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        // Falls through to the actual-weight rule
        assert!((set.protein[0].low - 1.2 * profile.weight_kg()).abs() < 1e-9);
    }

    #[test]
    fn test_ards_energy_at_bmi_30_and_50() {
        let (profile, vitals) = patient_at_100cm(30.0, 45);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::ArdsVentilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert!((set.energy[0].low - 330.0).abs() < 1e-9);
        assert!((set.energy[0].high - 420.0).abs() < 1e-9);

        let (profile, vitals) = patient_at_100cm(50.0, 45);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::ArdsVentilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert!((set.energy[0].low - 1100.0).abs() < 1e-9);
        assert!((set.energy[0].high - 1250.0).abs() < 1e-9);
        assert!((set.protein[0].low - 2.2 * vitals.ibw_kg).abs() < 1e-9);
        assert!((set.protein[0].high - 2.5 * vitals.ibw_kg).abs() < 1e-9);
    }

    #[test]
    fn test_ards_bmi_50_older_uses_modified_penn_state() {
        let (profile, vitals) = patient_at_100cm(50.0, 65);
        let set = recommend(&profile, &vitals, DiseaseState::ArdsVentilated, &vent(9.0, 38.5))
            .unwrap();
        let expected = 0.71 * vitals.rmr_kcal + 64.0 * 9.0 + 85.0 * 38.5 - 3085.0;
        assert_eq!(set.energy[0].kind, RangeKind::Point);
        assert!((set.energy[0].low - expected).abs() < 1e-9);
    }

    #[test]
    fn test_ards_protein_at_bmi_39_9_and_40() {
        let (profile, vitals) = patient_at_100cm(39.9, 45);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::ArdsVentilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert!((set.protein[0].low - 1.2 * 39.9).abs() < 1e-9);
        assert!((set.protein[0].high - 1.5 * 39.9).abs() < 1e-9);

        let (profile, vitals) = patient_at_100cm(40.0, 45);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::ArdsVentilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert!((set.protein[0].low - 2.2 * vitals.ibw_kg).abs() < 1e-9);
        assert!((set.protein[0].high - 2.5 * vitals.ibw_kg).abs() < 1e-9);
    }

    #[test]
    fn test_ventilated_inclusive_bounds() {
        let (profile, vitals) = patient_at_100cm(50.0, 45);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::Ventilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert!((set.energy[0].low - 550.0).abs() < 1e-9);
        assert!((set.energy[0].high - 700.0).abs() < 1e-9);

        let (profile, vitals) = patient_at_100cm(40.0, 45);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::Ventilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert_eq!(set.protein[0].kind, RangeKind::Point);
        assert!((set.protein[0].low - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_ventilated_bmi_above_50_uses_approximated_ibw() {
        let (profile, vitals) = patient_with_bmi(55.0, 50, Gender::Female);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::Ventilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        let ideal_bw = 22.0 * (170.0 - 100.0);
        assert!((set.energy[0].low - 22.0 * ideal_bw).abs() < 1e-9);
        assert!((set.energy[0].high - 25.0 * ideal_bw).abs() < 1e-9);
        assert_eq!(set.protein[0].kind, RangeKind::Point);
        assert!((set.protein[0].low - 2.5 * profile.weight_kg()).abs() < 1e-9);
    }

    #[test]
    fn test_ventilated_non_obese_has_no_targets() {
        let (profile, vitals) = patient_with_bmi(24.0, 50, Gender::Female);
        let set = recommend(
            &profile,
            &vitals,
            DiseaseState::Ventilated,
            &SupplementalInputs::default(),
        )
        .unwrap();
        assert!(set.energy.is_empty());
        assert!(set.protein.is_empty());
        assert!(!set.rationale_notes.is_empty());
    }

    #[test]
    fn test_sci_paraplegic_point_energy() {
        let (profile, vitals) = patient_with_bmi(23.0, 30, Gender::Male);
        let supplemental = SupplementalInputs {
            sci_type: Some(SciType::Paraplegic),
            ..Default::default()
        };
        let set = recommend(&profile, &vitals, DiseaseState::SpinalCordInjury, &supplemental)
            .unwrap();
        assert_eq!(set.energy[0].kind, RangeKind::Point);
        assert!((set.energy[0].low - 27.0 * profile.weight_kg()).abs() < 1e-9);
        assert_eq!(set.protein.len(), 2);
    }

    #[test]
    fn test_trauma_intubated_range_and_micronutrients() {
        let (profile, vitals) = patient_with_bmi(26.0, 35, Gender::Male);
        let supplemental = SupplementalInputs {
            intubated: Some(true),
            ..Default::default()
        };
        let set = recommend(&profile, &vitals, DiseaseState::Trauma, &supplemental).unwrap();
        assert!((set.energy[0].low - 20.0 * profile.weight_kg()).abs() < 1e-9);
        assert!((set.energy[0].high - 25.0 * profile.weight_kg()).abs() < 1e-9);
        assert!((set.energy[1].low - 1.2 * vitals.rmr_kcal).abs() < 1e-9);
        assert_eq!(set.micronutrients.len(), 3);
    }
}
