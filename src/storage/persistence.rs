use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{DerivedVitals, NutritionRecommendationSet, PatientProfile, Range, RangeKind};

/// One full assessment as written to a JSON report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub profile: PatientProfile,
    pub vitals: DerivedVitals,
    pub recommendations: NutritionRecommendationSet,
    pub general_fluid: Range,
}

/// Load and validate a patient profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<PatientProfile> {
    let content = fs::read_to_string(path)?;
    let profile: PatientProfile = serde_json::from_str(&content)?;
    Ok(profile)
}

/// Save an assessment report as pretty-printed JSON.
pub fn save_report_json<P: AsRef<Path>>(path: P, report: &AssessmentReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}

fn kind_name(kind: RangeKind) -> &'static str {
    match kind {
        RangeKind::Between => "between",
        RangeKind::Point => "point",
        RangeKind::AtLeast => "at_least",
        RangeKind::UpTo => "up_to",
    }
}

/// Write every numeric target of a recommendation set as flat CSV rows.
pub fn write_report_csv<P: AsRef<Path>>(path: P, set: &NutritionRecommendationSet) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "disease", "category", "label", "low", "high", "kind", "unit", "basis",
    ])?;

    let disease = set.disease.display_name();
    let mut rows: Vec<(&str, &Range)> = Vec::new();
    rows.extend(set.energy.iter().map(|r| ("energy", r)));
    rows.extend(set.protein.iter().map(|r| ("protein", r)));
    rows.extend(set.carbohydrate.iter().map(|r| ("carbohydrate", r)));
    rows.extend(set.fluid.iter().map(|r| ("fluid", r)));
    rows.extend(
        set.micronutrients
            .iter()
            .filter_map(|n| n.amount.as_ref().map(|r| (n.nutrient.as_str(), r))),
    );

    for (category, range) in rows {
        wtr.write_record([
            disease.to_string(),
            category.to_string(),
            range.label.clone().unwrap_or_default(),
            format!("{:.2}", range.low),
            format!("{:.2}", range.high),
            kind_name(range.kind).to_string(),
            range.unit.clone(),
            range.basis.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::general_fluid_needs;
    use crate::engine::recommend;
    use crate::models::{DiseaseState, Gender, SupplementalInputs};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn renal_report() -> AssessmentReport {
        let profile = PatientProfile::new(Gender::Male, 80.0, 180.0, 58, 1.2).unwrap();
        let vitals = DerivedVitals::compute(&profile).unwrap();
        let recommendations = recommend(
            &profile,
            &vitals,
            DiseaseState::Renal,
            &SupplementalInputs::default(),
        )
        .unwrap();
        AssessmentReport {
            profile,
            vitals,
            recommendations,
            general_fluid: general_fluid_needs(58, 80.0),
        }
    }

    #[test]
    fn test_load_profile() {
        let json = r#"{"gender": "Male", "weight_kg": 82.5, "height_cm": 178, "age_years": 47, "activity_factor": 1.2}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.gender(), Gender::Male);
        assert_eq!(profile.age_years(), 47);
    }

    #[test]
    fn test_load_profile_rejects_bad_activity_factor() {
        let json = r#"{"gender": "Female", "weight_kg": 60, "height_cm": 160, "age_years": 30, "activity_factor": 2.0}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(load_profile(file.path()).is_err());
    }

    #[test]
    fn test_report_json_reloads() {
        let report = renal_report();
        let out_file = NamedTempFile::new().unwrap();
        save_report_json(out_file.path(), &report).unwrap();

        let content = fs::read_to_string(out_file.path()).unwrap();
        let reloaded: AssessmentReport = serde_json::from_str(&content).unwrap();
        assert_eq!(reloaded.recommendations.protein.len(), 5);
        assert_eq!(reloaded.recommendations.disease, DiseaseState::Renal);
    }

    #[test]
    fn test_report_csv_rows() {
        let report = renal_report();
        let out_file = NamedTempFile::new().unwrap();
        write_report_csv(out_file.path(), &report.recommendations).unwrap();

        let mut rdr = csv::Reader::from_path(out_file.path()).unwrap();
        let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
        // One energy row and five protein rows
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][2], "CRRT");
        assert_eq!(&rows[5][5], "up_to");
    }
}
