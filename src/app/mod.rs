//! Main application module for RowPlot.
//!
//! | Sub-module     | Responsibility |
//! | -------------- | -------------- |
//! | [`dispatch`]   | Background engine calls and the response channel |
//! | [`update`]     | Per-frame response ingestion, panel rendering and action handling |
//! | [`run`]        | Top-level [`run_rowplot()`] entry point |

mod dispatch;
mod run;
mod update;

pub use dispatch::{EngineDispatcher, EngineResponse};
pub use run::{run_rowplot, RunError};

use eframe::egui;
use tracing::info;

use crate::api::EngineClient;
use crate::config::AppConfig;
use crate::data::session::AnalysisSession;
use crate::panels::{ChartsPanel, ParametersPanel, PointsPanel, ResultsPanel};

/// Standalone eframe application: parameter form, results, charts and target points.
pub struct RowplotApp {
    pub session: AnalysisSession,
    dispatcher: EngineDispatcher,
    parameters_panel: ParametersPanel,
    points_panel: PointsPanel,
    results_panel: ResultsPanel,
    charts_panel: ChartsPanel,
    config: AppConfig,
    visuals_applied: bool,
}

impl RowplotApp {
    pub fn new(cfg: &AppConfig) -> std::io::Result<Self> {
        let client = EngineClient::new(&cfg.api_base_url, cfg.request_timeout());
        Ok(Self {
            session: AnalysisSession::default(),
            dispatcher: EngineDispatcher::new(client)?,
            parameters_panel: ParametersPanel::default(),
            points_panel: PointsPanel::default(),
            results_panel: ResultsPanel::default(),
            charts_panel: ChartsPanel::new(cfg.chart_height),
            config: cfg.clone(),
            visuals_applied: false,
        })
    }

    /// Hook up repaint notifications, probe the engine and request the default parameters.
    pub fn start(&mut self, ctx: &egui::Context) {
        self.dispatcher.set_repaint_context(ctx.clone());
        info!(url = self.dispatcher.client().base_url(), "starting session");
        self.dispatcher.probe_health();
        let request = self.session.begin_defaults();
        self.dispatcher.dispatch(request);
    }
}
