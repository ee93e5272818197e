mod persistence;

pub use persistence::{load_profile, save_report_json, write_report_csv, AssessmentReport};
