//! End-to-end pipeline checks: artifacts on disk through to a verdict.

use std::path::Path;

use firecast::inference::{InferenceService, Observation, Verdict};
use firecast::model::{
    self, ArtifactError, DROP_COLUMNS_FILE_NAME, FEATURE_SCHEMA_FILE_NAME, MODEL_FILE_NAME,
};

const MODEL_JSON: &str = r#"{
    "model_version": 1,
    "n_features": 11,
    "classes": [0, 1],
    "nodes": [
        { "feature_index": 5, "threshold": 79.05, "left": 1, "right": 2, "value": 0 },
        { "feature_index": -1, "threshold": 0.0, "left": -1, "right": -1, "value": 0 },
        { "feature_index": 8, "threshold": 3.05, "left": 3, "right": 4, "value": 0 },
        { "feature_index": 10, "threshold": 0.55, "left": 5, "right": 6, "value": 0 },
        { "feature_index": -1, "threshold": 0.0, "left": -1, "right": -1, "value": 1 },
        { "feature_index": -1, "threshold": 0.0, "left": -1, "right": -1, "value": 0 },
        { "feature_index": -1, "threshold": 0.0, "left": -1, "right": -1, "value": 1 }
    ]
}"#;

fn write_artifacts(dir: &Path) {
    std::fs::write(dir.join(MODEL_FILE_NAME), MODEL_JSON).unwrap();
    std::fs::write(dir.join(DROP_COLUMNS_FILE_NAME), r#"["day", "year"]"#).unwrap();
    std::fs::write(
        dir.join(FEATURE_SCHEMA_FILE_NAME),
        r#"["month", "Temperature", "RH", "Ws", "Rain", "FFMC", "DMC", "DC", "ISI", "BUI", "FWI"]"#,
    )
    .unwrap();
}

fn hot_dry_day() -> Observation {
    Observation {
        day: 26.0,
        month: 7.0,
        year: 2012.0,
        temperature: 36.0,
        rh: 53.0,
        ws: 19.0,
        rain: 0.0,
        ffmc: 89.2,
        dmc: 17.1,
        dc: 98.6,
        isi: 10.0,
        bui: 23.9,
        fwi: 15.3,
    }
}

fn damp_day() -> Observation {
    Observation {
        day: 3.0,
        month: 6.0,
        year: 2012.0,
        temperature: 26.0,
        rh: 82.0,
        ws: 22.0,
        rain: 13.1,
        ffmc: 47.1,
        dmc: 2.5,
        dc: 7.1,
        isi: 0.3,
        bui: 2.7,
        fwi: 0.1,
    }
}

#[test]
fn loaded_artifacts_predict_fire_on_a_hot_dry_day() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    let service = InferenceService::from_artifacts(model::load(dir.path()).unwrap());
    let verdict = service.predict(&hot_dry_day()).unwrap();
    assert_eq!(verdict, Verdict::Fire);
    assert_eq!(verdict.label(), "There is a Forest Fire");
}

#[test]
fn loaded_artifacts_predict_no_fire_on_a_damp_day() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    let service = InferenceService::from_artifacts(model::load(dir.path()).unwrap());
    let verdict = service.predict(&damp_day()).unwrap();
    assert_eq!(verdict, Verdict::NoFire);
    assert_eq!(verdict.label(), "There is No Forest Fire");
}

#[test]
fn repeated_submissions_of_the_same_row_agree() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    let service = InferenceService::from_artifacts(model::load(dir.path()).unwrap());
    let first = service.predict(&hot_dry_day()).unwrap();
    let second = service.predict(&hot_dry_day()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn assembled_row_drops_exactly_the_excluded_columns() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    let service = InferenceService::from_artifacts(model::load(dir.path()).unwrap());
    let features = service.assemble(&hot_dry_day());
    assert_eq!(features.len(), 11);
    assert!(!features.names().contains(&"day"));
    assert!(!features.names().contains(&"year"));
    assert_eq!(features.names()[0], "month");
}

#[test]
fn missing_artifact_aborts_load_with_the_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    std::fs::remove_file(dir.path().join(FEATURE_SCHEMA_FILE_NAME)).unwrap();
    let err = model::load(dir.path()).unwrap_err();
    match err {
        ArtifactError::Missing { path } => {
            assert!(path.ends_with(FEATURE_SCHEMA_FILE_NAME), "{}", path.display());
        }
        other => panic!("expected Missing, got {other}"),
    }
}

#[test]
fn corrupt_artifact_aborts_load_as_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    write_artifacts(dir.path());
    std::fs::write(dir.path().join(MODEL_FILE_NAME), "{ not valid json").unwrap();
    let err = model::load(dir.path()).unwrap_err();
    assert!(matches!(err, ArtifactError::Corrupt { .. }), "{err}");
}
