//! Shared state types for the egui UI.

use crate::inference::{FeatureVector, Observation, Verdict};

/// Navigable dashboard pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    /// Exploratory data analysis charts.
    #[default]
    Eda,
    /// Fire prediction form.
    Predict,
}

impl Page {
    /// Navigation label for the page.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Eda => "EDA",
            Self::Predict => "Predict Forest Fire",
        }
    }
}

/// Tone of the status badge in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTone {
    /// Nothing happening.
    Idle,
    /// Routine progress message.
    Info,
    /// Recoverable problem.
    Warning,
    /// A request failed.
    Error,
}

impl StatusTone {
    /// Badge caption for the tone.
    pub fn badge_label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Info => "Ready",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBarState {
    /// Message text.
    pub text: String,
    /// Badge tone driving the indicator color.
    pub tone: StatusTone,
}

impl StatusBarState {
    /// Initial footer state.
    pub fn idle() -> Self {
        Self {
            text: "Pick a page to get started".into(),
            tone: StatusTone::Idle,
        }
    }
}

/// Editable values of the prediction form.
///
/// Bounds are enforced by the input widgets; defaults mirror the example
/// observation the original deployment pre-filled.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictFormState {
    /// Day of month, 1..=31.
    pub day: u32,
    /// Month, 1..=12.
    pub month: u32,
    /// Year; the source data only covers 2012.
    pub year: u32,
    /// Temperature in degrees Celsius, 22..=42.
    pub temperature: i32,
    /// Relative humidity in percent, 21..=90.
    pub rh: i32,
    /// Wind speed in km/h, 6..=29.
    pub ws: i32,
    /// Rain in mm, 0.0..=16.8.
    pub rain: f32,
    /// Fine Fuel Moisture Code, 28.6..=92.5.
    pub ffmc: f32,
    /// Duff Moisture Code, 1.1..=65.9.
    pub dmc: f32,
    /// Drought Code, 7.0..=220.4.
    pub dc: f32,
    /// Initial Spread Index, 0.0..=18.5.
    pub isi: f32,
    /// Buildup Index, 1.1..=68.0.
    pub bui: f32,
    /// Fire Weather Index, 0.0..=31.1.
    pub fwi: f32,
}

impl Default for PredictFormState {
    fn default() -> Self {
        Self {
            day: 26,
            month: 7,
            year: 2012,
            temperature: 36,
            rh: 53,
            ws: 19,
            rain: 0.0,
            ffmc: 89.2,
            dmc: 17.1,
            dc: 98.6,
            isi: 10.0,
            bui: 23.9,
            fwi: 15.3,
        }
    }
}

impl PredictFormState {
    /// Build the observation record submitted to the inference pipeline.
    pub fn observation(&self) -> Observation {
        Observation {
            day: self.day as f32,
            month: self.month as f32,
            year: self.year as f32,
            temperature: self.temperature as f32,
            rh: self.rh as f32,
            ws: self.ws as f32,
            rain: self.rain,
            ffmc: self.ffmc,
            dmc: self.dmc,
            dc: self.dc,
            isi: self.isi,
            bui: self.bui,
            fwi: self.fwi,
        }
    }
}

/// Top-level UI model consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    /// Currently rendered page.
    pub page: Page,
    /// Footer status.
    pub status: StatusBarState,
    /// Prediction form values.
    pub form: PredictFormState,
    /// Verdict of the most recent submission, if any.
    pub verdict: Option<Verdict>,
    /// Feature row of the most recent submission, for display.
    pub submitted_features: Option<FeatureVector>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: Page::default(),
            status: StatusBarState::idle(),
            form: PredictFormState::default(),
            verdict: None,
            submitted_features: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_defaults_match_the_prefilled_observation() {
        let form = PredictFormState::default();
        let observation = form.observation();
        assert_eq!(observation.day, 26.0);
        assert_eq!(observation.month, 7.0);
        assert_eq!(observation.year, 2012.0);
        assert_eq!(observation.ffmc, 89.2);
        assert_eq!(observation.fwi, 15.3);
    }

    #[test]
    fn default_page_is_eda() {
        assert_eq!(UiState::default().page, Page::Eda);
    }
}
