//! Static prediction artifacts and the classifier capability.
//!
//! The model, the column-drop list, and the pinned feature schema are read
//! once at startup and treated as opaque inputs: nothing in this crate
//! retrains or inspects the model beyond its single prediction entry point.

pub mod tree;

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

/// File name of the serialized classifier inside the artifacts directory.
pub const MODEL_FILE_NAME: &str = "fire_model.json";
/// File name of the column-drop list (JSON array of field names).
pub const DROP_COLUMNS_FILE_NAME: &str = "drop_columns.json";
/// File name of the pinned feature-order schema (JSON array of field names).
pub const FEATURE_SCHEMA_FILE_NAME: &str = "feature_schema.json";

/// Errors raised while loading the startup artifacts. All are fatal.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// An artifact file does not exist.
    #[error("artifact missing at {path}")]
    Missing { path: PathBuf },
    /// An artifact file exists but could not be read.
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// An artifact file exists but failed to deserialize.
    #[error("artifact {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The decoded model violates its structural invariants.
    #[error("invalid model in {path}: {reason}")]
    InvalidModel { path: PathBuf, reason: String },
}

/// Error raised when the model rejects a feature vector at prediction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InferenceError {
    /// The feature vector length does not match the model input shape.
    #[error("model rejected feature vector of length {actual}; expected {expected}")]
    BadShape { expected: usize, actual: usize },
    /// Tree evaluation failed to reach a leaf within the node budget.
    #[error("model evaluation did not reach a leaf")]
    NoLeaf,
}

/// Opaque single-row prediction capability.
///
/// The dashboard assumes nothing about the model beyond this contract, so
/// the concrete estimator can be swapped or mocked in tests.
pub trait Classifier {
    /// Number of `f32` values the model expects per row.
    fn n_features(&self) -> usize;
    /// Predict a class code for one feature vector.
    fn predict(&self, features: &[f32]) -> Result<u32, InferenceError>;
}

/// Artifacts loaded once at process start and immutable afterwards.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// The deserialized classifier.
    pub model: tree::TreeModel,
    /// Field names to remove from an observation before inference.
    pub exclusions: BTreeSet<String>,
    /// Exact feature-name order the model was trained on.
    pub feature_schema: Vec<String>,
}

/// Load all prediction artifacts from a directory.
pub fn load(dir: &Path) -> Result<Artifacts, ArtifactError> {
    let model_path = dir.join(MODEL_FILE_NAME);
    let model: tree::TreeModel = load_json(&model_path)?;
    model
        .validate()
        .map_err(|reason| ArtifactError::InvalidModel {
            path: model_path.clone(),
            reason,
        })?;

    let drop_columns: Vec<String> = load_json(&dir.join(DROP_COLUMNS_FILE_NAME))?;
    let feature_schema: Vec<String> = load_json(&dir.join(FEATURE_SCHEMA_FILE_NAME))?;
    if feature_schema.len() != model.n_features {
        return Err(ArtifactError::InvalidModel {
            path: model_path,
            reason: format!(
                "feature schema lists {} names but the model expects {} features",
                feature_schema.len(),
                model.n_features
            ),
        });
    }

    tracing::info!(
        "Loaded prediction artifacts: {} features, {} excluded columns",
        model.n_features,
        drop_columns.len()
    );
    Ok(Artifacts {
        model,
        exclusions: drop_columns.into_iter().collect(),
        feature_schema,
    })
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    if !path.is_file() {
        return Err(ArtifactError::Missing {
            path: path.to_path_buf(),
        });
    }
    let bytes = fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_valid_artifacts(dir: &Path) {
        std::fs::write(
            dir.join(MODEL_FILE_NAME),
            r#"{
                "model_version": 1,
                "n_features": 2,
                "classes": [0, 1],
                "nodes": [
                    {"feature_index": 0, "threshold": 0.5, "left": 1, "right": 2, "value": 0},
                    {"feature_index": -1, "threshold": 0.0, "left": -1, "right": -1, "value": 0},
                    {"feature_index": -1, "threshold": 0.0, "left": -1, "right": -1, "value": 1}
                ]
            }"#,
        )
        .unwrap();
        std::fs::write(dir.join(DROP_COLUMNS_FILE_NAME), r#"["day","year"]"#).unwrap();
        std::fs::write(dir.join(FEATURE_SCHEMA_FILE_NAME), r#"["month","FWI"]"#).unwrap();
    }

    #[test]
    fn loads_full_artifact_set() {
        let dir = tempdir().unwrap();
        write_valid_artifacts(dir.path());
        let artifacts = load(dir.path()).unwrap();
        assert_eq!(artifacts.model.n_features, 2);
        assert!(artifacts.exclusions.contains("day"));
        assert!(artifacts.exclusions.contains("year"));
        assert_eq!(artifacts.feature_schema, vec!["month", "FWI"]);
    }

    #[test]
    fn missing_model_is_reported_as_missing() {
        let dir = tempdir().unwrap();
        write_valid_artifacts(dir.path());
        std::fs::remove_file(dir.path().join(MODEL_FILE_NAME)).unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Missing { .. }), "{err}");
    }

    #[test]
    fn malformed_json_is_reported_as_corrupt() {
        let dir = tempdir().unwrap();
        write_valid_artifacts(dir.path());
        std::fs::write(dir.path().join(DROP_COLUMNS_FILE_NAME), "not json").unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::Corrupt { .. }), "{err}");
    }

    #[test]
    fn schema_length_must_match_model_width() {
        let dir = tempdir().unwrap();
        write_valid_artifacts(dir.path());
        std::fs::write(
            dir.path().join(FEATURE_SCHEMA_FILE_NAME),
            r#"["month","FWI","ISI"]"#,
        )
        .unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, ArtifactError::InvalidModel { .. }), "{err}");
    }
}
