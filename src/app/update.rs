//! Per-frame update for [`RowplotApp`].
//!
//! Each frame first applies every engine response that arrived, then renders
//! the side panel (form and target points) and the central area (results and
//! charts), and finally runs the actions the panels queued.

use eframe::egui;
use tracing::{debug, error, info};

use super::RowplotApp;
use crate::config::AppConfig;
use crate::data::export::{self, PointsFormat};
use crate::panels::{Panel, UiAction};

impl eframe::App for RowplotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.visuals_applied {
            ctx.set_visuals(if self.config.dark_mode {
                egui::Visuals::dark()
            } else {
                egui::Visuals::light()
            });
            self.visuals_applied = true;
        }

        for response in self.dispatcher.drain() {
            if !response.apply_to(&mut self.session) {
                debug!("stale engine response ignored");
            }
        }

        let mut actions = Vec::new();

        egui::SidePanel::left("rowplot_parameters")
            .resizable(true)
            .default_width(360.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.horizontal(|ui| {
                        ui.heading(self.parameters_panel.title());
                        let icon = if self.config.dark_mode {
                            egui_phosphor::regular::SUN
                        } else {
                            egui_phosphor::regular::MOON
                        };
                        if ui.small_button(icon).on_hover_text("Toggle theme").clicked() {
                            actions.push(UiAction::ToggleTheme);
                        }
                    });
                    self.parameters_panel
                        .render_panel(ui, &mut self.session, &mut actions);
                    ui.add_space(8.0);
                    self.points_panel
                        .render_panel(ui, &mut self.session, &mut actions);

                    let mut dismiss = false;
                    if let Some(err) = self.session.error() {
                        ui.add_space(8.0);
                        ui.horizontal_wrapped(|ui| {
                            ui.colored_label(ui.visuals().error_fg_color, err);
                            dismiss = ui.small_button(egui_phosphor::regular::X).clicked();
                        });
                    }
                    if dismiss {
                        self.session.dismiss_error();
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.session.is_loading() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Running simulation...");
                    });
                }
                self.results_panel
                    .render_panel(ui, &mut self.session, &mut actions);
                ui.add_space(12.0);
                self.charts_panel
                    .render_panel(ui, &mut self.session, &mut actions);
            });
        });

        for action in actions {
            self.handle_action(action);
        }
    }
}

impl RowplotApp {
    fn save_points(&mut self, format: PointsFormat) {
        let ext = format.extension();
        if let Some(path) = rfd::FileDialog::new()
            .set_file_name(format!("{}.{ext}", export::default_file_stem()))
            .add_filter(format.filter_name(), &[ext])
            .save_file()
        {
            self.session.save_points(&path, format);
        }
    }

    fn handle_action(&mut self, action: UiAction) {
        match action {
            UiAction::Calculate => {
                let request = self.session.begin_calculate();
                self.dispatcher.dispatch(request);
            }
            UiAction::FitPolynomial => match self.session.begin_fit() {
                Ok(request) => self.dispatcher.dispatch(request),
                Err(e) => info!("fit not sent: {e}"),
            },
            UiAction::SavePointsJson => self.save_points(PointsFormat::Json),
            UiAction::SavePointsCsv => self.save_points(PointsFormat::Csv),
            UiAction::LoadPointsJson => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter(PointsFormat::Json.filter_name(), &[PointsFormat::Json.extension()])
                    .pick_file()
                {
                    self.session.load_points(&path);
                }
            }
            UiAction::ToggleTheme => {
                self.config.dark_mode = !self.config.dark_mode;
                self.visuals_applied = false;
                // Start from the file so env overrides are not written back.
                let mut stored = AppConfig::load().unwrap_or_default();
                stored.dark_mode = self.config.dark_mode;
                match stored.save_to_default_path() {
                    Ok(()) => info!(dark_mode = self.config.dark_mode, "saved configuration"),
                    Err(e) => {
                        error!("failed to save configuration: {e}");
                        self.session
                            .report_error(format!("Failed to save configuration: {e}"));
                    }
                }
            }
        }
    }
}
