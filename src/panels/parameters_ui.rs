use egui::Ui;

use super::panel_trait::{Panel, PanelState, UiAction};
use crate::data::numeric_field::{format_value, NumericField};
use crate::data::parameters::FieldSpec;
use crate::data::session::AnalysisSession;

pub struct ParametersPanel {
    state: PanelState,
}

impl Default for ParametersPanel {
    fn default() -> Self {
        Self {
            state: PanelState::new("Parameters"),
        }
    }
}

impl ParametersPanel {
    pub const CALCULATE_LABEL: &'static str = "⚡ Calculate";
    pub const CALCULATING_LABEL: &'static str = "Calculating...";
}

impl Panel for ParametersPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &mut AnalysisSession, actions: &mut Vec<UiAction>) {
        if !session.form.is_loaded() {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading parameters...");
            });
            return;
        }

        for (spec, field) in session.form.fields_mut() {
            numeric_field_ui(ui, spec, field);
            ui.add_space(6.0);
        }

        ui.separator();
        let loading = session.is_loading();
        let label = if loading {
            Self::CALCULATING_LABEL
        } else {
            Self::CALCULATE_LABEL
        };
        let button = egui::Button::new(label).min_size(egui::vec2(ui.available_width(), 28.0));
        if ui.add_enabled(!loading, button).clicked() {
            actions.push(UiAction::Calculate);
        }
    }
}

/// Slider, step buttons and free-text entry bound to one [`NumericField`].
///
/// The text box keeps whatever the user types until it loses focus (blur or
/// Enter); only then is the text committed.
pub fn numeric_field_ui(ui: &mut Ui, spec: &FieldSpec, field: &mut NumericField) {
    ui.horizontal(|ui| {
        ui.label(spec.label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let value = format_value(field.value());
            match spec.unit {
                Some(unit) => ui.strong(format!("{value} {unit}")),
                None => ui.strong(value),
            };
        });
    });

    ui.horizontal(|ui| {
        let minus = egui::Button::new(egui_phosphor::regular::MINUS);
        if ui.add_enabled(!field.at_min(), minus).clicked() {
            field.decrement();
        }

        let mut v = field.value();
        let slider = egui::Slider::new(&mut v, field.min()..=field.max())
            .step_by(field.step())
            .show_value(false);
        if ui.add(slider).changed() {
            field.on_slider_change(v);
        }

        let plus = egui::Button::new(egui_phosphor::regular::PLUS);
        if ui.add_enabled(!field.at_max(), plus).clicked() {
            field.increment();
        }

        let mut text = field.display_text().to_string();
        let resp = ui.add(egui::TextEdit::singleline(&mut text).desired_width(64.0));
        if resp.changed() {
            field.on_text_change(text);
        }
        if resp.lost_focus() {
            field.on_commit();
        }
    });
}
