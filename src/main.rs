use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use clinical_nutrition_rs::calculators::general_fluid_needs;
use clinical_nutrition_rs::cli::{AssessArgs, Cli, Command};
use clinical_nutrition_rs::error::{NutritionError, Result};
use clinical_nutrition_rs::interface::{
    collect_patient_profile, display_corrected_calcium, display_disease_list,
    display_fluid_needs, display_recommendations, display_vitals, prompt_disease,
    prompt_supplemental,
};
use clinical_nutrition_rs::models::{DerivedVitals, DiseaseState, SupplementalInputs};
use clinical_nutrition_rs::storage::{
    load_profile, save_report_json, write_report_csv, AssessmentReport,
};
use clinical_nutrition_rs::{recommend, required_supplemental};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so reports on stdout stay clean. `RUST_LOG` adds directives.
fn init_logging(verbose: bool) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(format!("clinical_nutrition_rs={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Assess(args) => cmd_assess(args),
        Command::Fluid { age, weight } => cmd_fluid(age, weight),
        Command::Calcium { serum_ca, albumin } => {
            display_corrected_calcium(serum_ca, albumin);
            Ok(())
        }
        Command::Diseases => {
            display_disease_list();
            Ok(())
        }
    }
}

/// Resolve a disease name, suggesting close matches on a miss.
fn parse_disease(name: &str) -> Result<DiseaseState> {
    name.parse::<DiseaseState>().inspect_err(|_| {
        let suggestions = DiseaseState::suggestions(name);
        if !suggestions.is_empty() {
            let names: Vec<&str> = suggestions.iter().map(|d| d.display_name()).collect();
            eprintln!("Did you mean: {}?", names.join(", "));
        }
    })
}

/// Estimate nutrition needs for one patient and disease state.
fn cmd_assess(args: AssessArgs) -> Result<()> {
    let profile = match &args.profile {
        Some(path) => {
            info!(path = %path.display(), "loading patient profile");
            load_profile(path)?
        }
        None => collect_patient_profile()?,
    };

    let vitals = DerivedVitals::compute(&profile)?;
    display_vitals(&profile, &vitals);

    let disease = match &args.disease {
        Some(name) => parse_disease(name)?,
        None => prompt_disease()?,
    };

    let mut supplemental = SupplementalInputs {
        minute_ventilation_l_min: args.minute_vent,
        max_temp_c: args.max_temp,
        sci_type: args.sci_type,
        intubated: args.intubated,
    };

    // Only prompt when running interactively; flags alone must be complete.
    let missing: Vec<_> = required_supplemental(disease, &profile, &vitals)
        .into_iter()
        .filter(|f| !supplemental.has(*f))
        .collect();
    if !missing.is_empty() {
        if args.profile.is_some() {
            return Err(NutritionError::MissingSupplementalInput {
                disease,
                field: missing[0].name(),
            });
        }
        let prompted = prompt_supplemental(&missing)?;
        supplemental = SupplementalInputs {
            minute_ventilation_l_min: supplemental
                .minute_ventilation_l_min
                .or(prompted.minute_ventilation_l_min),
            max_temp_c: supplemental.max_temp_c.or(prompted.max_temp_c),
            sci_type: supplemental.sci_type.or(prompted.sci_type),
            intubated: supplemental.intubated.or(prompted.intubated),
        };
    }
    debug!(?supplemental, "supplemental inputs");

    let recommendations = recommend(&profile, &vitals, disease, &supplemental)?;
    display_recommendations(&recommendations);

    let general_fluid = general_fluid_needs(profile.age_years(), profile.weight_kg());
    display_fluid_needs(&general_fluid);

    if let Some(path) = &args.csv {
        write_report_csv(path, &recommendations)?;
        println!("CSV written to {}", path.display());
    }

    if let Some(path) = &args.json {
        let report = AssessmentReport {
            profile,
            vitals,
            recommendations,
            general_fluid,
        };
        save_report_json(path, &report)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn cmd_fluid(age: u32, weight: f64) -> Result<()> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(NutritionError::InvalidInput(format!(
            "weight must be greater than 0 kg (got {})",
            weight
        )));
    }
    display_fluid_needs(&general_fluid_needs(age, weight));
    Ok(())
}
