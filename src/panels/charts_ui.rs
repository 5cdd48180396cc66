//! Channel charts. The annotated channel turns primary clicks into target points.

use egui::Ui;
use egui_plot::{Line, Plot, Points};

use super::panel_trait::{Panel, PanelState, UiAction};
use crate::data::bounds::{DataRect, PixelRect};
use crate::data::series::{chart_series, plot_points, Channel, SeriesSample};
use crate::data::session::AnalysisSession;
use crate::data::trace_look::TraceLook;

pub struct ChartsPanel {
    state: PanelState,
    chart_height: f32,
}

impl Default for ChartsPanel {
    fn default() -> Self {
        Self::new(220.0)
    }
}

impl ChartsPanel {
    pub const INTERACTIVE_BADGE: &'static str = "Interactive";
    pub const EMPTY_STATE: &'static str =
        "Configure parameters and click Calculate to visualize the simulation.";

    pub fn new(chart_height: f32) -> Self {
        Self {
            state: PanelState::new("Charts"),
            chart_height,
        }
    }

    fn chart_ui(&self, ui: &mut Ui, session: &mut AnalysisSession, channel: Channel) {
        let interactive = channel == session.annotation().channel();
        let look = TraceLook::for_channel(channel);

        ui.horizontal(|ui| {
            ui.strong(channel.title());
            if interactive {
                ui.label(
                    egui::RichText::new(Self::INTERACTIVE_BADGE)
                        .small()
                        .color(look.color),
                );
            }
        });

        let (samples, data_rect): (Vec<SeriesSample>, Option<DataRect>) = if interactive {
            let ann = session.annotation();
            (ann.series().to_vec(), ann.data_rect())
        } else {
            let s = chart_series(session.result(), channel);
            let r = DataRect::fit(s.iter().map(|p| p.value), std::iter::empty(), session.duration());
            (s, r)
        };
        let targets: Vec<[f64; 2]> = if interactive {
            session
                .annotation()
                .points()
                .all()
                .iter()
                .map(|p| [p.t, p.a])
                .collect()
        } else {
            Vec::new()
        };

        let plot = Plot::new(("rowplot_chart", channel))
            .height(self.chart_height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false);
        let target_look = TraceLook::target_points();
        let plot_response = plot.show(ui, |plot_ui| {
            if let Some(r) = data_rect {
                plot_ui.set_plot_bounds_x(r.x_min..=r.x_max);
                plot_ui.set_plot_bounds_y(r.y_min..=r.y_max);
            }
            plot_ui.line(
                Line::new(channel.title(), plot_points(&samples))
                    .color(look.color)
                    .width(look.width)
                    .style(look.style),
            );
            if !targets.is_empty() {
                plot_ui.points(
                    Points::new("Targets", targets)
                        .radius(target_look.point_size)
                        .shape(target_look.marker)
                        .filled(true)
                        .color(target_look.color),
                );
            }
        });

        let response = &plot_response.response;
        if let Some(pos) = response.hover_pos() {
            let v = plot_response.transform.value_from_position(pos);
            ui.small(format!("t = {:.3} s    {:.4} {}", v.x, v.y, channel.unit()));
        }

        if !interactive {
            return;
        }

        // Measure the plotting area as laid out this frame, relative to the chart's own rect.
        let origin = response.rect.min;
        let frame = *plot_response.transform.frame();
        session.annotation_mut().set_geometry(PixelRect::new(
            (frame.left() - origin.x) as f64,
            (frame.right() - origin.x) as f64,
            (frame.top() - origin.y) as f64,
            (frame.bottom() - origin.y) as f64,
        ));

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                session
                    .annotation_mut()
                    .handle_click(local.x as f64, local.y as f64);
            }
        }
    }
}

impl Panel for ChartsPanel {
    fn state(&self) -> &PanelState {
        &self.state
    }

    fn render_panel(&mut self, ui: &mut Ui, session: &mut AnalysisSession, _actions: &mut Vec<UiAction>) {
        if session.result().is_none() {
            session.annotation_mut().clear_geometry();
            if !session.is_loading() {
                ui.centered_and_justified(|ui| {
                    ui.weak(Self::EMPTY_STATE);
                });
            }
            return;
        }

        ui.columns(2, |cols| {
            for (i, channel) in Channel::ALL.into_iter().enumerate() {
                let col = &mut cols[i % 2];
                col.push_id(("chart_cell", i), |ui| {
                    self.chart_ui(ui, session, channel);
                });
                col.add_space(12.0);
            }
        });
    }
}
