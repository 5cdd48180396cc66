//! Analysis session state: parameter form, current result, target points and
//! the bookkeeping for in-flight engine requests.
//!
//! All methods run on the UI thread. Network calls happen elsewhere; the
//! session only hands out [`PendingRequest`]s and applies their outcomes.

use std::path::Path;

use thiserror::Error;
use tracing::{debug, error, info, warn};

use super::annotation::AnnotationController;
use super::export::{self, PointsFormat};
use super::model::{FitRequest, SimulationParameters, SimulationResult};
use super::parameters::ParameterForm;
use super::series::chart_series;
use crate::api::ApiError;

/// Preconditions checked before a request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Select points on the acceleration chart")]
    NoPoints,
    #[error("Calculate first to set the base parameters")]
    NoBaseParameters,
}

/// Monotonic request tokens; only the newest token is accepted.
#[derive(Debug, Clone, Default)]
pub struct RequestFence {
    last_issued: u64,
}

impl RequestFence {
    pub fn issue(&mut self) -> u64 {
        self.last_issued += 1;
        self.last_issued
    }

    pub fn is_current(&self, token: u64) -> bool {
        token != 0 && token == self.last_issued
    }

    pub fn latest(&self) -> u64 {
        self.last_issued
    }
}

/// What an outgoing request asks the engine for.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    Defaults,
    Calculate(SimulationParameters),
    Fit(FitRequest),
}

impl RequestKind {
    pub fn label(&self) -> &'static str {
        match self {
            RequestKind::Defaults => "defaults",
            RequestKind::Calculate(_) => "calculate",
            RequestKind::Fit(_) => "fit-polynomial",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub token: u64,
    pub kind: RequestKind,
}

#[derive(Debug)]
pub struct AnalysisSession {
    pub form: ParameterForm,
    annotation: AnnotationController,
    result: Option<SimulationResult>,
    last_params: Option<SimulationParameters>,
    /// Parameters of the calculation in flight, promoted on success.
    pending_params: Option<(u64, SimulationParameters)>,
    loading: bool,
    error: Option<String>,
    result_fence: RequestFence,
    defaults_fence: RequestFence,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            form: ParameterForm::default(),
            annotation: AnnotationController::default(),
            result: None,
            last_params: None,
            pending_params: None,
            loading: false,
            error: None,
            result_fence: RequestFence::default(),
            defaults_fence: RequestFence::default(),
        }
    }

    pub fn result(&self) -> Option<&SimulationResult> {
        self.result.as_ref()
    }

    pub fn last_params(&self) -> Option<&SimulationParameters> {
        self.last_params.as_ref()
    }

    /// Advisory only; a second request may still be issued.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn annotation(&self) -> &AnnotationController {
        &self.annotation
    }

    pub fn annotation_mut(&mut self) -> &mut AnnotationController {
        &mut self.annotation
    }

    /// Duration of the annotated chart: `T` of the displayed calculation, else 1.
    pub fn duration(&self) -> f64 {
        self.last_params
            .as_ref()
            .map(|p| p.duration)
            .filter(|t| t.is_finite() && *t > 0.0)
            .unwrap_or(1.0)
    }

    pub fn begin_defaults(&mut self) -> PendingRequest {
        PendingRequest {
            token: self.defaults_fence.issue(),
            kind: RequestKind::Defaults,
        }
    }

    /// Apply the defaults response. Failures fall back silently.
    pub fn apply_defaults(
        &mut self,
        token: u64,
        outcome: Result<SimulationParameters, ApiError>,
    ) -> bool {
        if !self.defaults_fence.is_current(token) {
            debug!(token, "discarding stale defaults response");
            return false;
        }
        match outcome {
            Ok(params) => {
                info!("loaded default parameters from engine");
                self.form.load(&params);
            }
            Err(e) => {
                warn!("default parameters unavailable, using fallback: {e}");
                self.form.load(&SimulationParameters::fallback());
            }
        }
        true
    }

    /// Start a calculation with the committed form values.
    ///
    /// The displayed result and its duration stay in place until the response
    /// is applied.
    pub fn begin_calculate(&mut self) -> PendingRequest {
        let params = self.form.to_parameters();
        self.error = None;
        self.loading = true;
        let token = self.result_fence.issue();
        self.pending_params = Some((token, params.clone()));
        PendingRequest {
            token,
            kind: RequestKind::Calculate(params),
        }
    }

    /// Start a fit against the last successfully calculated parameters and a copy
    /// of the points.
    pub fn begin_fit(&mut self) -> Result<PendingRequest, AnalysisError> {
        let check = if self.annotation.points().is_empty() {
            Err(AnalysisError::NoPoints)
        } else {
            self.last_params.clone().ok_or(AnalysisError::NoBaseParameters)
        };
        let parameters = match check {
            Ok(p) => p,
            Err(e) => {
                self.error = Some(e.to_string());
                return Err(e);
            }
        };
        self.error = None;
        self.loading = true;
        self.pending_params = None;
        let request = FitRequest {
            parameters,
            points: self.annotation.points().snapshot(),
        };
        Ok(PendingRequest {
            token: self.result_fence.issue(),
            kind: RequestKind::Fit(request),
        })
    }

    /// Apply a calculate/fit response. Returns `false` for stale tokens.
    ///
    /// On success the result and the annotated chart's data range are replaced
    /// together. On failure the current result stays and the error line is set.
    pub fn apply_result(
        &mut self,
        token: u64,
        kind: &str,
        outcome: Result<SimulationResult, ApiError>,
    ) -> bool {
        if !self.result_fence.is_current(token) {
            debug!(token, latest = self.result_fence.latest(), kind, "discarding stale response");
            return false;
        }
        self.loading = false;
        let params = self
            .pending_params
            .take()
            .filter(|(t, _)| *t == token)
            .map(|(_, p)| p);
        match outcome {
            Ok(result) => {
                info!(token, kind, samples = result.tt.len(), "engine result applied");
                if let Some(params) = params {
                    self.last_params = Some(params);
                }
                self.result = Some(result);
                self.refresh_series();
            }
            Err(e) => {
                warn!(token, kind, "engine request failed: {e}");
                self.error = Some(format!("Request '{kind}' failed: {e}"));
            }
        }
        true
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Write the target points to `path`. Failures go to the error line.
    pub fn save_points(&mut self, path: &Path, format: PointsFormat) -> bool {
        let points = self.annotation.points().all();
        let outcome = match format {
            PointsFormat::Json => export::save_points_json(path, points),
            PointsFormat::Csv => export::save_points_csv(path, points),
        };
        match outcome {
            Ok(()) => {
                info!(path = %path.display(), count = points.len(), "saved target points");
                true
            }
            Err(e) => {
                error!(path = %path.display(), "failed to save points: {e}");
                self.error = Some(format!("Failed to save points: {e}"));
                false
            }
        }
    }

    /// Replace the target points with the contents of `path`. On failure the
    /// current points stay and the error line is set.
    pub fn load_points(&mut self, path: &Path) -> bool {
        match export::load_points_json(path) {
            Ok(points) => {
                info!(path = %path.display(), count = points.len(), "loaded target points");
                self.annotation.replace_points(points);
                true
            }
            Err(e) => {
                error!(path = %path.display(), "failed to load points: {e}");
                self.error = Some(format!("Failed to load points: {e}"));
                false
            }
        }
    }

    /// Show a message on the error line.
    pub fn report_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    fn refresh_series(&mut self) {
        let series = chart_series(self.result.as_ref(), self.annotation.channel());
        let t_max = self.duration();
        self.annotation.set_series(series, t_max);
    }
}
