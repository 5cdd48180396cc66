//! Top-level entry point for running RowPlot as a native window.

use eframe::egui;
use thiserror::Error;

use super::RowplotApp;
use crate::config::AppConfig;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to start the async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error(transparent)]
    Eframe(#[from] eframe::Error),
}

/// Launch RowPlot in a native window. Blocks until the window is closed.
pub fn run_rowplot(cfg: AppConfig) -> Result<(), RunError> {
    let mut app = RowplotApp::new(&cfg)?;

    let [w, h] = cfg.window_size;
    let opts = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.title.clone())
            .with_inner_size(egui::vec2(w, h)),
        ..Default::default()
    };

    eframe::run_native(
        &cfg.title,
        opts,
        Box::new(move |cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            app.start(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}
