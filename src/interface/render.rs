use crate::calculators::corrected_calcium;
use crate::models::{
    DerivedVitals, DiseaseState, NutritionRecommendationSet, PatientProfile, Range,
};

fn print_range(range: &Range, decimals: usize) {
    match &range.label {
        Some(label) => println!(
            "  - {}: {} ({})",
            label,
            range.display_amount(decimals),
            range.basis
        ),
        None => println!("  - {} ({})", range.display_amount(decimals), range.basis),
    }
}

fn print_section(title: &str, ranges: &[Range], decimals: usize) {
    if ranges.is_empty() {
        return;
    }
    println!("{}:", title);
    for range in ranges {
        print_range(range, decimals);
    }
}

/// Baseline values shared by every condition.
pub fn display_vitals(profile: &PatientProfile, vitals: &DerivedVitals) {
    println!();
    println!("=== Baseline ===");
    println!(
        "{} | {:.1} kg | {:.1} cm | {} y | {}",
        profile.gender(),
        profile.weight_kg(),
        profile.height_cm(),
        profile.age_years(),
        profile.activity_factor().label()
    );
    println!(
        "Estimated daily energy expenditure: {:.2} kcal/d (MSJ x AF)",
        vitals.tdee_kcal
    );
    println!("Ideal body weight: {:.2} kg (Devine)", vitals.ibw_kg);
    println!("BMI: {:.2} ({})", vitals.bmi, vitals.bmi_class);
    println!();
}

pub fn display_recommendations(set: &NutritionRecommendationSet) {
    println!("=== {} Nutrition Needs ===", set.disease);
    println!();

    print_section("Energy", &set.energy, 0);
    print_section("Protein", &set.protein, 1);
    print_section("Carbohydrate", &set.carbohydrate, 0);

    if let Some(fluid) = &set.fluid {
        println!("Fluid:");
        let decimals = if fluid.unit == "L/day" { 1 } else { 0 };
        print_range(fluid, decimals);
    }

    if !set.micronutrients.is_empty() {
        println!("Micronutrients:");
        for note in &set.micronutrients {
            match &note.amount {
                Some(amount) => println!(
                    "  - {}: {} ({})",
                    note.nutrient,
                    amount.display_amount(0),
                    note.guidance
                ),
                None => println!("  - {}: {}", note.nutrient, note.guidance),
            }
        }
    }

    if !set.rationale_notes.is_empty() {
        println!("Notes:");
        for note in &set.rationale_notes {
            println!("  - {}", note);
        }
    }
    println!();
}

pub fn display_fluid_needs(range: &Range) {
    println!("=== General Fluid Requirements (AND) ===");
    print_range(range, 0);
    println!();
}

/// Corrected calcium is only shown when both inputs are present and non-zero.
pub fn display_corrected_calcium(serum_ca: f64, albumin: f64) {
    println!("=== Corrected Calcium ===");
    if serum_ca != 0.0 && albumin != 0.0 {
        println!(
            "Corrected calcium: {:.2} mg/dL",
            corrected_calcium(serum_ca, albumin)
        );
    } else {
        println!("Please enter valid values for serum calcium and albumin.");
    }
    println!();
}

pub fn display_disease_list() {
    println!("Supported disease states:");
    for disease in DiseaseState::ALL {
        println!("  - {}", disease);
    }
}
