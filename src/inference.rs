//! Inference request pipeline: user-entered observation to verdict.
//!
//! This is the one place where a mistake silently corrupts results, so the
//! pipeline is explicit about its contract: fields are dropped per the
//! exclusion artifact, the remainder keeps the declared order, and the
//! assembled names are validated against the pinned training-time schema
//! before the model ever sees the vector.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::model::{Artifacts, Classifier, InferenceError};

/// Field names of an observation record, in declared order.
///
/// This order is the contract between the form, the assembler, and the
/// training-time schema; it matches the dataset column order.
pub const FIELD_NAMES: [&str; 13] = [
    "day",
    "month",
    "year",
    "Temperature",
    "RH",
    "Ws",
    "Rain",
    "FFMC",
    "DMC",
    "DC",
    "ISI",
    "BUI",
    "FWI",
];

/// One fully-populated row of weather readings and fire-weather indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Day of month, 1..=31.
    pub day: f32,
    /// Month, 1..=12.
    pub month: f32,
    /// Four-digit year.
    pub year: f32,
    /// Noon temperature in degrees Celsius.
    pub temperature: f32,
    /// Relative humidity in percent.
    pub rh: f32,
    /// Wind speed in km/h.
    pub ws: f32,
    /// Total daily rain in mm.
    pub rain: f32,
    /// Fine Fuel Moisture Code.
    pub ffmc: f32,
    /// Duff Moisture Code.
    pub dmc: f32,
    /// Drought Code.
    pub dc: f32,
    /// Initial Spread Index.
    pub isi: f32,
    /// Buildup Index.
    pub bui: f32,
    /// Fire Weather Index.
    pub fwi: f32,
}

impl Observation {
    /// Field values in the same order as [`FIELD_NAMES`].
    pub fn values(&self) -> [f32; 13] {
        [
            self.day,
            self.month,
            self.year,
            self.temperature,
            self.rh,
            self.ws,
            self.rain,
            self.ffmc,
            self.dmc,
            self.dc,
            self.isi,
            self.bui,
            self.fwi,
        ]
    }
}

/// An observation after exclusion, ready for the model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    names: Vec<&'static str>,
    values: Vec<f32>,
}

impl FeatureVector {
    /// Remaining field names, in declared order.
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// Remaining field values, parallel to [`FeatureVector::names`].
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of remaining fields.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether every field was excluded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Remove excluded fields from an observation, keeping declared order.
///
/// Deterministic and value-preserving: no clamping or range checks happen
/// here. Exclusion names that match no field are ignored; genuine schema
/// drift is caught by [`InferenceService::predict`].
pub fn assemble(observation: &Observation, exclusions: &BTreeSet<String>) -> FeatureVector {
    let values = observation.values();
    let mut kept_names = Vec::with_capacity(FIELD_NAMES.len());
    let mut kept_values = Vec::with_capacity(FIELD_NAMES.len());
    for (name, value) in FIELD_NAMES.iter().zip(values) {
        if exclusions.contains(*name) {
            continue;
        }
        kept_names.push(*name);
        kept_values.push(value);
    }
    FeatureVector {
        names: kept_names,
        values: kept_values,
    }
}

/// Binary prediction outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The model predicted no forest fire.
    NoFire,
    /// The model predicted a forest fire.
    Fire,
}

impl Verdict {
    /// Map a raw class code to a verdict.
    ///
    /// Code `0` means no fire; any other code is treated as fire, matching
    /// the original deployment's broad-match branch.
    pub fn from_class_code(code: u32) -> Self {
        if code == 0 { Self::NoFire } else { Self::Fire }
    }

    /// Display heading shown after a submission.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoFire => "There is No Forest Fire",
            Self::Fire => "There is a Forest Fire",
        }
    }
}

/// Errors aborting a single prediction; the session itself survives.
#[derive(Debug, Error)]
pub enum PredictError {
    /// Assembled fields do not match the pinned training-time schema.
    #[error("feature schema mismatch: model expects [{expected}] but assembled [{actual}]")]
    SchemaMismatch { expected: String, actual: String },
    /// The model rejected the feature vector.
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

/// Immutable prediction service built from the startup artifacts.
pub struct InferenceService {
    model: Box<dyn Classifier>,
    exclusions: BTreeSet<String>,
    feature_schema: Vec<String>,
}

impl InferenceService {
    /// Build a service from an explicit classifier, exclusion set, and schema.
    pub fn new(
        model: Box<dyn Classifier>,
        exclusions: BTreeSet<String>,
        feature_schema: Vec<String>,
    ) -> Self {
        Self {
            model,
            exclusions,
            feature_schema,
        }
    }

    /// Build a service from loaded artifacts.
    pub fn from_artifacts(artifacts: Artifacts) -> Self {
        Self::new(
            Box::new(artifacts.model),
            artifacts.exclusions,
            artifacts.feature_schema,
        )
    }

    /// The exclusion set applied before inference.
    pub fn exclusions(&self) -> &BTreeSet<String> {
        &self.exclusions
    }

    /// Assemble the feature vector for an observation without predicting.
    ///
    /// Used by the form to preview the exact row the model would receive.
    pub fn assemble(&self, observation: &Observation) -> FeatureVector {
        assemble(observation, &self.exclusions)
    }

    /// Run one observation through the full pipeline.
    pub fn predict(&self, observation: &Observation) -> Result<Verdict, PredictError> {
        let features = self.assemble(observation);
        self.check_schema(&features)?;
        let code = self.model.predict(features.values())?;
        let verdict = Verdict::from_class_code(code);
        tracing::debug!("Predicted class code {code} -> {:?}", verdict);
        Ok(verdict)
    }

    fn check_schema(&self, features: &FeatureVector) -> Result<(), PredictError> {
        let matches = features.len() == self.feature_schema.len()
            && features
                .names()
                .iter()
                .zip(&self.feature_schema)
                .all(|(assembled, expected)| *assembled == expected);
        if matches {
            return Ok(());
        }
        Err(PredictError::SchemaMismatch {
            expected: self.feature_schema.join(", "),
            actual: features.names().join(", "),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InferenceError;

    /// Classifier double that records nothing and returns a fixed code.
    struct FixedCode {
        n_features: usize,
        code: u32,
    }

    impl Classifier for FixedCode {
        fn n_features(&self) -> usize {
            self.n_features
        }

        fn predict(&self, features: &[f32]) -> Result<u32, InferenceError> {
            if features.len() != self.n_features {
                return Err(InferenceError::BadShape {
                    expected: self.n_features,
                    actual: features.len(),
                });
            }
            Ok(self.code)
        }
    }

    fn sample_observation() -> Observation {
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

    fn day_year_exclusions() -> BTreeSet<String> {
        ["day", "year"].iter().map(|s| s.to_string()).collect()
    }

    fn schema_without_day_year() -> Vec<String> {
        FIELD_NAMES
            .iter()
            .filter(|name| **name != "day" && **name != "year")
            .map(|name| name.to_string())
            .collect()
    }

    #[test]
    fn assemble_drops_exclusions_and_keeps_declared_order() {
        let features = assemble(&sample_observation(), &day_year_exclusions());
        assert_eq!(features.len(), 11);
        assert!(!features.names().contains(&"day"));
        assert!(!features.names().contains(&"year"));
        assert_eq!(features.names()[0], "month");
        assert_eq!(
            features.names(),
            &[
                "month",
                "Temperature",
                "RH",
                "Ws",
                "Rain",
                "FFMC",
                "DMC",
                "DC",
                "ISI",
                "BUI",
                "FWI"
            ]
        );
        assert_eq!(features.values()[0], 7.0);
        assert_eq!(features.values()[10], 15.3);
    }

    #[test]
    fn assemble_is_deterministic() {
        let exclusions = day_year_exclusions();
        let first = assemble(&sample_observation(), &exclusions);
        let second = assemble(&sample_observation(), &exclusions);
        assert_eq!(first, second);
    }

    #[test]
    fn assemble_field_count_is_total_minus_matching_exclusions() {
        let observation = sample_observation();
        assert_eq!(assemble(&observation, &BTreeSet::new()).len(), 13);
        assert_eq!(assemble(&observation, &day_year_exclusions()).len(), 11);
    }

    #[test]
    fn assemble_ignores_unknown_exclusion_names() {
        let exclusions: BTreeSet<String> = ["no_such_field".to_string()].into_iter().collect();
        let features = assemble(&sample_observation(), &exclusions);
        assert_eq!(features.len(), 13);
    }

    #[test]
    fn assemble_passes_rh_boundaries_through_unchanged() {
        for rh in [21.0, 90.0] {
            let observation = Observation {
                rh,
                ..sample_observation()
            };
            let features = assemble(&observation, &day_year_exclusions());
            let idx = features.names().iter().position(|n| *n == "RH").unwrap();
            assert_eq!(features.values()[idx], rh);
        }
    }

    #[test]
    fn verdict_mapping_is_broad_match() {
        assert_eq!(Verdict::from_class_code(0), Verdict::NoFire);
        assert_eq!(Verdict::from_class_code(1), Verdict::Fire);
        assert_eq!(Verdict::from_class_code(42), Verdict::Fire);
    }

    #[test]
    fn verdict_labels_match_display_copy() {
        assert_eq!(Verdict::NoFire.label(), "There is No Forest Fire");
        assert_eq!(Verdict::Fire.label(), "There is a Forest Fire");
    }

    #[test]
    fn predict_maps_zero_to_no_fire_and_nonzero_to_fire() {
        for (code, expected) in [(0, Verdict::NoFire), (1, Verdict::Fire), (3, Verdict::Fire)] {
            let service = InferenceService::new(
                Box::new(FixedCode {
                    n_features: 11,
                    code,
                }),
                day_year_exclusions(),
                schema_without_day_year(),
            );
            assert_eq!(service.predict(&sample_observation()).unwrap(), expected);
        }
    }

    #[test]
    fn predict_is_idempotent_for_identical_submissions() {
        let service = InferenceService::new(
            Box::new(FixedCode {
                n_features: 11,
                code: 1,
            }),
            day_year_exclusions(),
            schema_without_day_year(),
        );
        let first = service.predict(&sample_observation()).unwrap();
        let second = service.predict(&sample_observation()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn predict_fails_fast_on_schema_drift() {
        // Schema trained without RH, but the exclusion set only drops
        // day/year: the assembled row would be silently wrong, so the
        // service must refuse it.
        let schema: Vec<String> = FIELD_NAMES
            .iter()
            .filter(|name| !["day", "year", "RH"].contains(*name))
            .map(|name| name.to_string())
            .collect();
        let service = InferenceService::new(
            Box::new(FixedCode {
                n_features: 10,
                code: 0,
            }),
            day_year_exclusions(),
            schema,
        );
        let err = service.predict(&sample_observation()).unwrap_err();
        assert!(matches!(err, PredictError::SchemaMismatch { .. }), "{err}");
    }

    #[test]
    fn predict_surfaces_model_shape_rejection() {
        // Schema agrees with the assembled names, but the model itself
        // expects a different width; the bad shape must not be coerced.
        let service = InferenceService::new(
            Box::new(FixedCode {
                n_features: 5,
                code: 0,
            }),
            day_year_exclusions(),
            schema_without_day_year(),
        );
        let err = service.predict(&sample_observation()).unwrap_err();
        assert!(matches!(
            err,
            PredictError::Inference(InferenceError::BadShape {
                expected: 5,
                actual: 11
            })
        ));
    }
}
