use crate::engine::HandlerContext;
use crate::models::{DiseaseState, Note, NutritionRecommendationSet, Range};

/// Activity factor applied to RMR after a cerebrovascular event.
const CVD_ACTIVITY_FACTOR: f64 = 1.3;

pub(crate) fn cerebral_vascular(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::CerebralVascularDisease);

    set.energy.push(Range::point(
        ctx.vitals.rmr_kcal * CVD_ACTIVITY_FACTOR,
        "kcal/day",
        "RMR x 1.3 activity factor (sedentary)",
    ));
    set.protein.push(ctx.per_kg(
        0.8,
        1.0,
        "g/day",
        "0.8-1.0 g/kg unless modified for a subsequent condition",
    ));
    set.fluid = Some(ctx.per_kg(
        25.0,
        35.0,
        "ml/day",
        "25-35 ml/kg; emphasize non-energy containing fluids",
    ));

    set.micronutrients.push(Note::new(
        "Sodium",
        Some(Range::between(2.0, 4.0, "g/day", "hypertension")),
        "2-4 g/day for individuals with hypertension; overall heart-healthy diet",
    ));

    set.note("Higher energy needs if more active.");
    set.note("Carbohydrates: 50-60% of total daily energy.");
    set.note("Total fat: 25-35% of total daily energy.");
    set.note("Saturated and trans fat: less than 7% of total daily energy.");
    set
}

pub(crate) fn heart_failure(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::HeartFailure);

    set.energy.push(Range::point(
        ctx.vitals.tdee_kcal,
        "kcal/day",
        "Mifflin-St Jeor x activity factor",
    ));
    set.protein
        .push(ctx.per_kg(1.1, 1.4, "g/day", "1.1-1.4 g/kg"));
    set.fluid = Some(Range::between(
        1.4,
        1.9,
        "L/day",
        "depending on clinical symptoms",
    ));
    set.micronutrients.push(Note::new(
        "Sodium",
        Some(Range::up_to(2000.0, "mg/day", "sodium restriction")),
        "Restrict sodium to <2000 mg Na/day",
    ));

    set.note("Fluid <2 L/day for serum sodium <130 mEq/L.");
    set
}

pub(crate) fn liver(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::Liver);

    set.energy
        .push(ctx.per_kg(25.0, 30.0, "kcal/day", "25-30 kcal/kg"));
    set.protein
        .push(ctx.per_kg(1.0, 1.5, "g/day", "1-1.5 g/kg body weight"));

    set.note("Hepatic encephalopathy: no need to restrict protein; recent studies do not support it.");
    set.note("Treat hepatic encephalopathy with FDA-approved medications (e.g., lactulose).");
    set
}

pub(crate) fn pancreatitis(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::Pancreatitis);

    set.energy
        .push(ctx.per_kg_point(25.0, "kcal/day", "25 kcal/kg"));
    set.protein
        .push(ctx.per_kg_point(1.5, "g/day", "1.5 g/kg"));

    set.note("Jejunal feeding (below the ligament of Treitz) if there is feeding intolerance.");
    set.note("Elemental enteral formula for patients with feeding intolerance.");
    set
}

/// Renal disease. Every modality's protein range is returned together.
pub(crate) fn renal(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::Renal);

    set.energy.push(
        ctx.per_kg(25.0, 35.0, "kcal/day", "25-35 kcal/kg")
            .labeled("Acute renal failure"),
    );

    set.protein.extend([
        ctx.per_kg(0.8, 1.0, "g/day", "0.8-1.0 g/kg")
            .labeled("AKI without dialysis"),
        ctx.per_kg(1.2, 1.5, "g/day", "1.2-1.5 g/kg")
            .labeled("Renal replacement therapy"),
        ctx.per_kg(1.2, 1.3, "g/day", "1.2-1.3 g/kg")
            .labeled("Peritoneal dialysis"),
        ctx.per_kg(1.5, 1.8, "g/day", "1.5-1.8 g/kg")
            .labeled("Hemodialysis"),
        Range::up_to(2.5 * ctx.weight(), "g/day", "up to 2.5 g/kg").labeled("CRRT"),
    ]);

    set.note("Fluid, predialysis, PD, CRRT: as tolerated.");
    set.note("Fluid, HD: 500 ml + urine output; if anuric (<75 ml/day), 1-1.2 L/day.");
    set
}
