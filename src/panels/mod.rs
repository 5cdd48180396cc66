pub mod charts_ui;
pub mod panel_trait;
pub mod parameters_ui;
pub mod points_ui;
pub mod results_ui;

pub use charts_ui::ChartsPanel;
pub use panel_trait::{Panel, PanelState, UiAction};
pub use parameters_ui::ParametersPanel;
pub use points_ui::PointsPanel;
pub use results_ui::ResultsPanel;
