use tracing::debug;

use crate::calculators::constants::{KCAL_PER_G_CARB, KCAL_PER_G_PROTEIN, OBESE_PROTEIN_FLOOR_G};
use crate::engine::HandlerContext;
use crate::models::{DiseaseState, Gender, Note, NutritionRecommendationSet, Range};

pub(crate) fn cancer(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::Cancer);

    if ctx.bmi() < 30.0 {
        set.energy.push(
            ctx.per_kg(25.0, 30.0, "kcal/day", "25-30 kcal/kg")
                .labeled("Non-ambulatory or sedentary adults"),
        );
        set.energy.push(
            ctx.per_kg(30.0, 35.0, "kcal/day", "30-35 kcal/kg")
                .labeled("Hypermetabolic, weight gain, first month after HSCT, or anabolic"),
        );
        set.energy.push(
            Range::at_least(35.0 * ctx.weight(), "kcal/day", "35 kcal/kg and above")
                .labeled("Severely stressed, acute GVHD, head and neck chemoradiation, or malabsorption"),
        );
    } else {
        debug!(bmi = ctx.bmi(), "cancer energy left to clinical judgment");
        set.note("Energy needs are widely variable in the obese patient. Use clinical judgment.");
    }

    for (low, high, label) in [
        (1.0, 1.2, "Non-stressed patient with cancer"),
        (1.2, 1.5, "Undergoing treatment"),
        (1.5, 2.0, "Stem cell transplant"),
        (1.5, 2.5, "Increased needs (protein-losing enteropathy, wasting)"),
    ] {
        let basis = format!("{:.1}-{:.1} g/kg", low, high);
        set.protein
            .push(ctx.per_kg(low, high, "g/day", &basis).labeled(label));
    }

    set
}

/// Carbohydrate grams at 40-45% of the chosen energy target.
fn carbohydrate_for(energy: &Range) -> Range {
    Range::between(
        energy.low * 0.40 / KCAL_PER_G_CARB,
        energy.high * 0.45 / KCAL_PER_G_CARB,
        "g/day",
        "40-45% of total energy needs",
    )
}

pub(crate) fn diabetes(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::Diabetes);
    let bmi = ctx.bmi();

    let energy = if bmi < 25.0 {
        ctx.per_kg(25.0, 30.0, "kcal/day", "25-30 kcal/kg (normal weight)")
    } else if bmi < 30.0 {
        Range::point(
            ctx.vitals.tdee_kcal,
            "kcal/day",
            "Mifflin-St Jeor x activity factor (overweight)",
        )
    } else {
        ctx.per_kg_point(20.0, "kcal/day", "20 kcal/kg (obese or very inactive)")
    };
    debug!(bmi, energy_low = energy.low, energy_high = energy.high, "diabetes energy");

    set.carbohydrate.push(carbohydrate_for(&energy));
    set.energy.push(energy);

    set.protein.push(
        ctx.per_kg(0.8, 1.0, "g/day", "0.8-1.0 g/kg")
            .labeled("Maintenance"),
    );
    set.protein.push(
        ctx.per_kg(1.0, 1.5, "g/day", "1.0-1.5 g/kg")
            .labeled("Repletion"),
    );

    let fiber = match ctx.profile.gender() {
        Gender::Male => 38.0,
        Gender::Female => 25.0,
    };
    set.micronutrients.push(Note::new(
        "Fiber",
        Some(Range::point(fiber, "g/day", "general recommendation")),
        "DRI = 14 g/1000 kcal",
    ));

    set.fluid = Some(ctx.per_kg(25.0, 35.0, "ml/day", "25-35 ml/kg"));

    set.note("Advise 15-20% of daily calories from protein.");
    set.note("Base the ideal percentage of kcal from CHO, protein, and fat on individual assessment and plan.");
    set
}

pub(crate) fn obese_non_critical(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::ObeseNonCritical);
    let tdee = ctx.vitals.tdee_kcal;
    let af = ctx.profile.activity_factor();

    let basis = format!("Mifflin-St Jeor x activity factor {} ({})", af.value(), af.label());
    set.energy.push(Range::point(tdee, "kcal/day", &basis));

    let low = (0.15 * tdee / KCAL_PER_G_PROTEIN).max(OBESE_PROTEIN_FLOOR_G);
    let high = (0.35 * tdee / KCAL_PER_G_PROTEIN).max(low);
    set.protein.push(Range::between(
        low,
        high,
        "g/day",
        "15-35% of energy as protein, minimum 65 g/day",
    ));

    set.note("Minimum of 65-70 grams protein/day.");
    set
}

pub(crate) fn wound_healing(ctx: &HandlerContext) -> NutritionRecommendationSet {
    let mut set = NutritionRecommendationSet::new(DiseaseState::WoundHealing);

    set.energy
        .push(ctx.per_kg(30.0, 35.0, "kcal/day", "30-35 kcal/kg"));
    if ctx.bmi() < 18.5 {
        set.energy.push(
            ctx.per_kg(35.0, 40.0, "kcal/day", "35-40 kcal/kg")
                .labeled("Underweight or losing weight"),
        );
    }

    set.protein
        .push(ctx.per_kg(1.25, 1.5, "g/day", "1.25-1.5 g/kg"));

    let mut fluid = ctx.per_kg(30.0, 40.0, "ml/day", "30-40 ml/kg");
    if fluid.low < 1500.0 {
        debug!(fluid_low = fluid.low, "wound fluid below 1500 ml advisory minimum");
    }
    fluid.basis.push_str(", minimum 1500 ml unless cardiac or renal limits apply");
    set.fluid = Some(fluid);

    set.note("Stage III-IV wounds: consider fluid losses from draining wounds, fever, stool or ostomy output.");
    set.note("Offer vitamin and mineral supplements when intake is poor or deficiencies are confirmed or suspected.");
    set.note("Provide enhanced foods or oral supplements between meals if needed.");
    set
}
