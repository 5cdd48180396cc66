//! Runs engine requests off the UI thread and hands results back over a channel.
//!
//! Responses are drained once per frame in [`RowplotApp::update`](super::RowplotApp),
//! so a result and the bounds derived from it are applied within the same frame.

use std::sync::mpsc::{Receiver, Sender};

use eframe::egui;
use tracing::{info, warn};

use crate::api::{ApiError, EngineClient};
use crate::data::model::{SimulationParameters, SimulationResult};
use crate::data::session::{AnalysisSession, PendingRequest, RequestKind};

/// A finished engine call, tagged with the token it was issued under.
#[derive(Debug)]
pub enum EngineResponse {
    Defaults {
        token: u64,
        outcome: Result<SimulationParameters, ApiError>,
    },
    Result {
        token: u64,
        kind: &'static str,
        outcome: Result<SimulationResult, ApiError>,
    },
}

impl EngineResponse {
    /// Apply to the session. Returns `false` if the response was stale.
    pub fn apply_to(self, session: &mut AnalysisSession) -> bool {
        match self {
            EngineResponse::Defaults { token, outcome } => session.apply_defaults(token, outcome),
            EngineResponse::Result {
                token,
                kind,
                outcome,
            } => session.apply_result(token, kind, outcome),
        }
    }
}

pub struct EngineDispatcher {
    runtime: tokio::runtime::Runtime,
    client: EngineClient,
    tx: Sender<EngineResponse>,
    rx: Receiver<EngineResponse>,
    repaint: Option<egui::Context>,
}

impl EngineDispatcher {
    pub fn new(client: EngineClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("rowplot-engine")
            .enable_all()
            .build()?;
        let (tx, rx) = std::sync::mpsc::channel();
        Ok(Self {
            runtime,
            client,
            tx,
            rx,
            repaint: None,
        })
    }

    /// Context to wake when a response arrives.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn client(&self) -> &EngineClient {
        &self.client
    }

    /// Spawn the request. Overlapping requests are not cancelled; stale
    /// responses are dropped by the session's fence when applied.
    pub fn dispatch(&self, request: PendingRequest) {
        let PendingRequest { token, kind } = request;
        info!(token, kind = kind.label(), url = self.client.base_url(), "dispatching engine request");
        let client = self.client.clone();
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.runtime.spawn(async move {
            let response = match kind {
                RequestKind::Defaults => EngineResponse::Defaults {
                    token,
                    outcome: client.default_parameters().await,
                },
                RequestKind::Calculate(params) => EngineResponse::Result {
                    token,
                    kind: "calculate",
                    outcome: client.calculate(&params).await,
                },
                RequestKind::Fit(request) => EngineResponse::Result {
                    token,
                    kind: "fit-polynomial",
                    outcome: client.fit_polynomial(&request).await,
                },
            };
            // The receiver only goes away on shutdown.
            let _ = tx.send(response);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });
    }

    /// Log whether the engine answers `GET /health`.
    pub fn probe_health(&self) {
        let client = self.client.clone();
        self.runtime.spawn(async move {
            match client.health().await {
                Ok(h) => info!(status = %h.status, "engine reachable"),
                Err(e) => warn!("engine health check failed: {e}"),
            }
        });
    }

    /// All responses that arrived since the last call.
    pub fn drain(&self) -> Vec<EngineResponse> {
        self.rx.try_iter().collect()
    }
}
