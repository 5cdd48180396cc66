use egui::Ui;

use super::panel_trait::{Panel, PanelState, UiAction};
use crate::data::points::DomainPoint;
use crate::data::session::AnalysisSession;

pub struct PointsPanel {
    state: PanelState,
}

impl Default for PointsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Fitting Points"),
        }
    }
}

impl PointsPanel {
    pub const CLICK_HINT: &'static str = "Click on the acceleration chart to add points";
    pub const CLEAR_LABEL: &'static str = "Clear";
    pub const FIT_LABEL: &'static str = "Fit Polynomial";

    /// Chip text for one point, e.g. `t=0.50, a=-1.25`.
    pub fn point_label(p: &DomainPoint) -> String {
        format!("t={:.2}, a={:.2}", p.t, p.a)
    }
}

impl Panel for PointsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &mut AnalysisSession, actions: &mut Vec<UiAction>) {
        if session.result().is_none() {
            return;
        }
        let count = session.annotation().points().len();
        ui.strong(format!("{} ({count})", self.state.title));
        ui.small(Self::CLICK_HINT);

        let mut remove: Option<usize> = None;
        ui.horizontal_wrapped(|ui| {
            for (i, p) in session.annotation().points().all().iter().enumerate() {
                ui.group(|ui| {
                    ui.label(Self::point_label(p));
                    if ui
                        .small_button(egui_phosphor::regular::X)
                        .on_hover_text("Remove point")
                        .clicked()
                    {
                        remove = Some(i);
                    }
                });
            }
        });
        if let Some(i) = remove {
            session.annotation_mut().remove_point(i);
        }

        let empty = session.annotation().points().is_empty();
        ui.horizontal(|ui| {
            let clear = egui::Button::new(format!("{} {}", egui_phosphor::regular::BROOM, Self::CLEAR_LABEL));
            if ui.add_enabled(!empty, clear).clicked() {
                session.annotation_mut().clear_points();
            }
            let fit = egui::Button::new(Self::FIT_LABEL);
            if ui.add_enabled(!session.is_loading() && !empty, fit).clicked() {
                actions.push(UiAction::FitPolynomial);
            }
        });

        ui.horizontal(|ui| {
            if ui.add_enabled(!empty, egui::Button::new("💾 JSON")).clicked() {
                actions.push(UiAction::SavePointsJson);
            }
            if ui.add_enabled(!empty, egui::Button::new("💾 CSV")).clicked() {
                actions.push(UiAction::SavePointsCsv);
            }
            if ui.button("📂 Load").clicked() {
                actions.push(UiAction::LoadPointsJson);
            }
        });
    }
}
