//! Click-to-annotate wiring for the interactive chart.
//!
//! The controller owns the target points and the data range of the annotated
//! channel. Geometry is measured by the renderer every frame and handed in via
//! [`AnnotationController::set_geometry`]; the data range is rebuilt in full
//! whenever the series, the point set or the duration changes.

use tracing::debug;

use super::bounds::{ChartBounds, DataRect, PixelRect};
use super::points::{DomainPoint, PointCollection};
use super::series::{Channel, SeriesSample};

#[derive(Debug, Clone)]
pub struct AnnotationController {
    channel: Channel,
    points: PointCollection,
    series: Vec<SeriesSample>,
    t_max: f64,
    data_rect: Option<DataRect>,
    pixel_rect: Option<PixelRect>,
}

impl Default for AnnotationController {
    fn default() -> Self {
        Self::new(Channel::RowerAcceleration)
    }
}

impl AnnotationController {
    pub fn new(channel: Channel) -> Self {
        let mut ctrl = Self {
            channel,
            points: PointCollection::new(),
            series: Vec::new(),
            t_max: 1.0,
            data_rect: None,
            pixel_rect: None,
        };
        ctrl.recompute();
        ctrl
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn points(&self) -> &PointCollection {
        &self.points
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn series(&self) -> &[SeriesSample] {
        &self.series
    }

    /// Data range for rendering; `None` only for an invalid duration.
    pub fn data_rect(&self) -> Option<DataRect> {
        self.data_rect
    }

    /// Full mapping, available once both geometry and data range are known.
    pub fn bounds(&self) -> Option<ChartBounds> {
        ChartBounds::new(self.pixel_rect?, self.data_rect?)
    }

    pub fn bounds_ready(&self) -> bool {
        self.bounds().is_some()
    }

    /// Replace the backing series and the duration in one step.
    pub fn set_series(&mut self, series: Vec<SeriesSample>, t_max: f64) {
        self.series = series;
        self.t_max = t_max;
        self.recompute();
    }

    /// Record the plotting area measured by the renderer, in surface-local pixels.
    pub fn set_geometry(&mut self, pixel_rect: PixelRect) {
        self.pixel_rect = pixel_rect.is_valid().then_some(pixel_rect);
    }

    /// Forget geometry, e.g. when the chart is not shown this frame.
    pub fn clear_geometry(&mut self) {
        self.pixel_rect = None;
    }

    /// Handle a click at surface-local pixel coordinates.
    ///
    /// Ignored while geometry is unknown or when the click misses the plotting
    /// area. Returns the point that was added.
    pub fn handle_click(&mut self, px: f64, py: f64) -> Option<DomainPoint> {
        let bounds = self.bounds()?;
        let point = bounds.pixel_to_data(px, py)?;
        self.add_point(point);
        Some(point)
    }

    pub fn add_point(&mut self, point: DomainPoint) {
        debug!(t = point.t, a = point.a, "target point added");
        self.points.add(point);
        self.recompute();
    }

    pub fn remove_point(&mut self, index: usize) -> Option<DomainPoint> {
        let removed = self.points.remove_at(index);
        if removed.is_some() {
            debug!(index, "target point removed");
            self.recompute();
        }
        removed
    }

    pub fn clear_points(&mut self) {
        self.points.clear();
        self.recompute();
    }

    pub fn replace_points(&mut self, points: Vec<DomainPoint>) {
        self.points.replace(points);
        self.recompute();
    }

    fn recompute(&mut self) {
        self.data_rect = DataRect::fit(
            self.series.iter().map(|s| s.value),
            self.points.values(),
            self.t_max,
        );
    }
}
