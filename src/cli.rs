use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::SciType;

/// Clinical nutrition needs calculator: energy, protein, and fluid targets by disease state.
#[derive(Parser, Debug)]
#[command(name = "clinical-nutrition")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Log branch selection and intermediate values to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Estimate nutrition needs for a patient and disease state.
    Assess(AssessArgs),

    /// General fluid requirements by age band.
    Fluid {
        /// Age in years.
        #[arg(long)]
        age: u32,

        /// Weight in kilograms.
        #[arg(long)]
        weight: f64,
    },

    /// Serum calcium corrected for albumin.
    Calcium {
        /// Serum calcium (mg/dL).
        #[arg(long)]
        serum_ca: f64,

        /// Albumin (g/dL).
        #[arg(long)]
        albumin: f64,
    },

    /// List supported disease states.
    Diseases,
}

impl Default for Command {
    fn default() -> Self {
        Command::Assess(AssessArgs::default())
    }
}

#[derive(Args, Debug, Default)]
pub struct AssessArgs {
    /// Patient profile JSON file; prompts interactively when omitted.
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Disease state name or alias (e.g. "renal", "chf", "Wound healing").
    #[arg(short, long)]
    pub disease: Option<String>,

    /// Minute ventilation (L/min) for the Penn State equations.
    #[arg(long)]
    pub minute_vent: Option<f64>,

    /// Max temperature in the past 24 hours (°C) for the Penn State equations.
    #[arg(long)]
    pub max_temp: Option<f64>,

    /// Spinal cord injury type.
    #[arg(long, value_enum)]
    pub sci_type: Option<SciType>,

    /// Whether a trauma patient is intubated.
    #[arg(long)]
    pub intubated: Option<bool>,

    /// Write the full report as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the numeric targets as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
