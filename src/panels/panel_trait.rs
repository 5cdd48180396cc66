use egui::Ui;

use crate::data::session::AnalysisSession;

/// Deferred requests raised by panels, processed by the app after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Calculate,
    FitPolynomial,
    SavePointsJson,
    SavePointsCsv,
    LoadPointsJson,
    ToggleTheme,
}

#[derive(Debug, Clone, Copy)]
pub struct PanelState {
    pub title: &'static str,
}

impl PanelState {
    pub fn new(title: &'static str) -> Self {
        Self { title }
    }
}

pub trait Panel {
    fn state(&self) -> &PanelState;

    fn title(&self) -> &'static str {
        self.state().title
    }

    /// Render the panel body. Actions that need the network or a dialog are
    /// pushed to `actions` instead of being run inline.
    fn render_panel(&mut self, ui: &mut Ui, session: &mut AnalysisSession, actions: &mut Vec<UiAction>);
}
