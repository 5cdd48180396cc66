//! RowPlot crate root: re-exports and module wiring.
//!
//! RowPlot is a desktop dashboard for a rowing-simulation engine reached over HTTP:
//! - `data`: chart geometry, target points, numeric fields and the analysis session
//! - `api`: async client for the engine's JSON endpoints
//! - `config`: YAML configuration and environment overrides
//! - `panels`: egui panels for the form, target points, results and charts
//! - `app`: the eframe application and its run helper

pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod panels;

// Public re-exports for a compact external API
pub use api::{ApiError, EngineClient};
pub use app::{run_rowplot, RowplotApp, RunError};
pub use config::{AppConfig, ConfigError};
pub use data::annotation::AnnotationController;
pub use data::bounds::{compute_bounds, pixel_to_data, ChartBounds, DataRect, PixelRect};
pub use data::numeric_field::{FieldState, NumericField};
pub use data::points::{DomainPoint, PointCollection};
pub use data::series::{chart_series, Channel, SeriesSample};
pub use data::session::{AnalysisError, AnalysisSession};
