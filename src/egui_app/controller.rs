//! Controller bridging the dataset and inference service to the egui UI.

use std::path::PathBuf;

use crate::config::{self, AppSettings, StartPage};
use crate::dataset::{self, FireRow, stats};
use crate::egui_app::state::{Page, StatusBarState, StatusTone, UiState};
use crate::inference::{FeatureVector, InferenceService};

/// Number of dataset rows shown in the EDA preview grid.
const PREVIEW_ROWS: usize = 10;

/// Precomputed aggregates backing the EDA charts.
#[derive(Debug, Clone)]
pub struct EdaData {
    /// Fire / not-fire totals.
    pub class_counts: stats::ClassCounts,
    /// Grouped counts per month.
    pub by_month: Vec<stats::BucketCounts>,
    /// Grouped counts per whole degree.
    pub by_temperature: Vec<stats::BucketCounts>,
    /// Grouped counts per relative-humidity bin.
    pub rh_bins: Vec<stats::BucketCounts>,
    /// Fire counts per rain reading.
    pub by_rain: Vec<stats::BucketCounts>,
    /// Grouped counts per FWI danger category.
    pub fwi_categories: Vec<stats::BucketCounts>,
    /// Mean temperature across fire rows.
    pub mean_fire_temperature: Option<f32>,
    /// Leading rows for the preview grid.
    pub preview: Vec<FireRow>,
}

impl EdaData {
    fn from_rows(rows: Vec<FireRow>) -> Self {
        Self {
            class_counts: stats::class_counts(&rows),
            by_month: stats::counts_by_month(&rows),
            by_temperature: stats::counts_by_temperature(&rows),
            rh_bins: stats::rh_bins(&rows),
            by_rain: stats::fire_counts_by_rain(&rows),
            fwi_categories: stats::fwi_categories(&rows),
            mean_fire_temperature: stats::mean_fire_temperature(&rows),
            preview: rows.into_iter().take(PREVIEW_ROWS).collect(),
        }
    }
}

/// Maintains dashboard state and dispatches user actions.
pub struct DashboardController {
    /// View model consumed by the renderer.
    pub ui: UiState,
    service: InferenceService,
    settings: AppSettings,
    dataset_path: PathBuf,
    eda: Option<EdaData>,
    eda_error: Option<String>,
}

impl DashboardController {
    /// Build the controller, restoring the last page and loading the dataset.
    pub fn new(service: InferenceService, settings: AppSettings) -> Self {
        let dataset_path = settings.resolved_dataset_path();
        let mut controller = Self {
            ui: UiState {
                page: match settings.start_page {
                    StartPage::Eda => Page::Eda,
                    StartPage::Predict => Page::Predict,
                },
                ..UiState::default()
            },
            service,
            settings,
            dataset_path,
            eda: None,
            eda_error: None,
        };
        controller.reload_dataset();
        controller
    }

    /// Aggregates for the EDA page, when the dataset loaded.
    pub fn eda(&self) -> Option<&EdaData> {
        self.eda.as_ref()
    }

    /// Load error shown on the EDA page when the dataset is unavailable.
    pub fn eda_error(&self) -> Option<&str> {
        self.eda_error.as_deref()
    }

    /// Path of the dataset file currently in use.
    pub fn dataset_path(&self) -> &PathBuf {
        &self.dataset_path
    }

    /// Preview of the feature row the model would receive for the current form.
    pub fn feature_preview(&self) -> FeatureVector {
        self.service.assemble(&self.ui.form.observation())
    }

    /// Switch pages and persist the choice for the next launch.
    pub fn select_page(&mut self, page: Page) {
        if self.ui.page == page {
            return;
        }
        self.ui.page = page;
        self.settings.start_page = match page {
            Page::Eda => StartPage::Eda,
            Page::Predict => StartPage::Predict,
        };
        if let Err(err) = config::save(&self.settings) {
            self.set_status(format!("Failed to save settings: {err}"), StatusTone::Warning);
        }
    }

    /// Re-read the dataset file and recompute all aggregates.
    pub fn reload_dataset(&mut self) {
        match dataset::load_dataset(&self.dataset_path) {
            Ok(rows) => {
                self.set_status(
                    format!("{} dataset rows loaded", rows.len()),
                    StatusTone::Info,
                );
                self.eda = Some(EdaData::from_rows(rows));
                self.eda_error = None;
            }
            Err(err) => {
                let message = format!(
                    "Failed to load dataset {}: {err}",
                    self.dataset_path.display()
                );
                tracing::warn!("{message}");
                self.eda = None;
                self.eda_error = Some(message.clone());
                self.set_status(message, StatusTone::Warning);
            }
        }
    }

    /// Run the current form values through the inference pipeline.
    ///
    /// Per-request failures surface in the status bar; the session survives
    /// and the user can resubmit.
    pub fn submit_prediction(&mut self) {
        let observation = self.ui.form.observation();
        self.ui.submitted_features = Some(self.service.assemble(&observation));
        match self.service.predict(&observation) {
            Ok(verdict) => {
                self.ui.verdict = Some(verdict);
                self.set_status(verdict.label().to_string(), StatusTone::Info);
            }
            Err(err) => {
                self.ui.verdict = None;
                self.set_status(format!("Prediction failed: {err}"), StatusTone::Error);
            }
        }
    }

    pub(crate) fn set_status(&mut self, text: String, tone: StatusTone) {
        self.ui.status = StatusBarState { text, tone };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::{FIELD_NAMES, Verdict};
    use crate::model::{Classifier, InferenceError};
    use std::collections::BTreeSet;
    use std::io::Write;

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

    fn service(code: u32) -> InferenceService {
        let exclusions: BTreeSet<String> =
            ["day", "year"].iter().map(|s| s.to_string()).collect();
        let schema: Vec<String> = FIELD_NAMES
            .iter()
            .filter(|name| **name != "day" && **name != "year")
            .map(|name| name.to_string())
            .collect();
        InferenceService::new(
            Box::new(FixedCode {
                n_features: 11,
                code,
            }),
            exclusions,
            schema,
        )
    }

    fn settings_with_dataset(dir: &std::path::Path) -> AppSettings {
        let dataset = dir.join("fires.csv");
        let mut file = std::fs::File::create(&dataset).unwrap();
        writeln!(file, "day,month,year,Temperature,RH,Ws,Rain,FFMC,DMC,DC,ISI,BUI,FWI,Classes").unwrap();
        writeln!(file, "01,06,2012,29,57,18,0,65.7,3.4,7.6,1.3,3.4,0.5,not fire").unwrap();
        writeln!(file, "26,07,2012,36,53,19,0,89.2,17.1,98.6,10,23.9,15.3,fire").unwrap();
        AppSettings {
            dataset_path: Some(dataset),
            ..AppSettings::default()
        }
    }

    #[test]
    fn loads_dataset_and_builds_aggregates_on_construction() {
        let dir = tempfile::tempdir().unwrap();
        let controller = DashboardController::new(service(0), settings_with_dataset(dir.path()));
        let eda = controller.eda().unwrap();
        assert_eq!(eda.class_counts.total(), 2);
        assert_eq!(eda.class_counts.fire, 1);
        assert_eq!(eda.preview.len(), 2);
        assert_eq!(eda.by_rain.len(), 1);
        assert_eq!(eda.by_rain[0].fire, 1);
        assert!(controller.eda_error().is_none());
    }

    #[test]
    fn missing_dataset_is_a_warning_not_a_crash() {
        let dir = tempfile::tempdir().unwrap();
        let settings = AppSettings {
            dataset_path: Some(dir.path().join("absent.csv")),
            ..AppSettings::default()
        };
        let controller = DashboardController::new(service(0), settings);
        assert!(controller.eda().is_none());
        assert!(controller.eda_error().is_some());
        assert_eq!(controller.ui.status.tone, StatusTone::Warning);
    }

    #[test]
    fn submit_sets_verdict_and_status() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller =
            DashboardController::new(service(1), settings_with_dataset(dir.path()));
        controller.submit_prediction();
        assert_eq!(controller.ui.verdict, Some(Verdict::Fire));
        assert_eq!(controller.ui.status.text, "There is a Forest Fire");
        assert_eq!(controller.ui.submitted_features.as_ref().unwrap().len(), 11);
    }

    #[test]
    fn resubmitting_identical_values_repeats_the_verdict() {
        let dir = tempfile::tempdir().unwrap();
        let mut controller =
            DashboardController::new(service(0), settings_with_dataset(dir.path()));
        controller.submit_prediction();
        let first = controller.ui.verdict;
        controller.submit_prediction();
        assert_eq!(controller.ui.verdict, first);
        assert_eq!(controller.ui.verdict, Some(Verdict::NoFire));
    }

    #[test]
    fn failed_prediction_clears_verdict_and_reports_error() {
        let dir = tempfile::tempdir().unwrap();
        // Model narrower than the assembled row: the service must refuse.
        let exclusions: BTreeSet<String> =
            ["day", "year"].iter().map(|s| s.to_string()).collect();
        let schema: Vec<String> = FIELD_NAMES
            .iter()
            .filter(|name| **name != "day" && **name != "year")
            .map(|name| name.to_string())
            .collect();
        let bad_service = InferenceService::new(
            Box::new(FixedCode {
                n_features: 4,
                code: 0,
            }),
            exclusions,
            schema,
        );
        let mut controller =
            DashboardController::new(bad_service, settings_with_dataset(dir.path()));
        controller.submit_prediction();
        assert_eq!(controller.ui.verdict, None);
        assert_eq!(controller.ui.status.tone, StatusTone::Error);
    }

    #[test]
    fn selecting_the_same_page_is_a_no_op() {
        let base = tempfile::tempdir().unwrap();
        let _guard = crate::app_dirs::ConfigBaseGuard::set(base.path().to_path_buf());
        let dir = tempfile::tempdir().unwrap();
        let mut controller =
            DashboardController::new(service(0), settings_with_dataset(dir.path()));
        let status_before = controller.ui.status.clone();
        controller.select_page(Page::Eda);
        assert_eq!(controller.ui.status, status_before);
    }

    #[test]
    fn selecting_a_page_persists_it_for_next_launch() {
        let base = tempfile::tempdir().unwrap();
        let _guard = crate::app_dirs::ConfigBaseGuard::set(base.path().to_path_buf());
        let dir = tempfile::tempdir().unwrap();
        let mut controller =
            DashboardController::new(service(0), settings_with_dataset(dir.path()));
        controller.select_page(Page::Predict);
        assert_eq!(controller.ui.page, Page::Predict);
        let saved = config::load_or_default().unwrap();
        assert_eq!(saved.start_page, StartPage::Predict);
    }
}
