use rowplot::{run_rowplot, AppConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), rowplot::RunError> {
    let loaded = AppConfig::load();
    let cfg = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    }
    .with_env_overrides();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = loaded {
        tracing::warn!("using default configuration: {e}");
    }
    tracing::info!(api = %cfg.api_base_url, "starting RowPlot");

    run_rowplot(cfg)
}
