use egui::Ui;

use super::panel_trait::{Panel, PanelState, UiAction};
use crate::data::model::Magnitudes;
use crate::data::session::AnalysisSession;

pub struct ResultsPanel {
    state: PanelState,
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Results"),
        }
    }
}

/// `(label, formatted value, unit)` for each summary magnitude, in display order.
pub fn magnitude_rows(m: &Magnitudes) -> [(&'static str, String, &'static str); 7] {
    [
        ("Initial Energy", format!("{:.2}", m.initial_energy), "J"),
        ("Final Energy", format!("{:.2}", m.final_energy), "J"),
        ("ΔE System", format!("{:.2}", m.system_energy_change), "J"),
        ("Rower Energy", format!("{:.2}", m.rower_energy), "J"),
        ("Final Position", format!("{:.3}", m.final_position), "m"),
        ("Final Velocity", format!("{:.3}", m.final_velocity), "m/s"),
        ("ΔV", format!("{:.4}", m.velocity_change), "m/s"),
    ]
}

impl Panel for ResultsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &mut AnalysisSession, _actions: &mut Vec<UiAction>) {
        let Some(result) = session.result() else {
            return;
        };
        ui.heading(format!("📊 {}", self.state.title));
        egui::Grid::new("results_grid")
            .num_columns(4)
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for (i, (label, value, unit)) in magnitude_rows(&result.magnitudes).into_iter().enumerate() {
                    ui.vertical(|ui| {
                        ui.small(label);
                        ui.horizontal(|ui| {
                            ui.strong(value);
                            ui.weak(unit);
                        });
                    });
                    if i % 4 == 3 {
                        ui.end_row();
                    }
                }
            });
        ui.add_space(6.0);
        ui.label(egui::RichText::new(&result.polynomial_latex).monospace());
    }
}
