//! Affine mapping between a chart's plotting area in pixels and its data range.
//!
//! The data range is always recomputed from scratch out of the rendered series
//! and the annotated points, since the padding depends on the joint min/max
//! of both sources.

use super::points::DomainPoint;

/// Fraction of the value range added above and below the data.
pub const Y_PADDING_FRACTION: f64 = 0.1;
/// Padding used when every value is identical.
pub const DEGENERATE_PADDING: f64 = 1.0;

/// Plotting area in surface-local pixels. `top < bottom` (pixel y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl PixelRect {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// `true` once layout has produced a finite area with positive size.
    pub fn is_valid(&self) -> bool {
        let finite = self.left.is_finite()
            && self.right.is_finite()
            && self.top.is_finite()
            && self.bottom.is_finite();
        finite && self.width() > 0.0 && self.height() > 0.0
    }

    /// Inclusive containment test.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.left && px <= self.right && py >= self.top && py <= self.bottom
    }
}

/// Data range shown by the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataRect {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl DataRect {
    /// Fit the value axis around `series_values ∪ point_values`, with the time axis
    /// spanning `[0, x_max]`.
    ///
    /// Non-finite values are ignored. With no finite values at all the range is
    /// centred on zero. Returns `None` when `x_max` is not a positive finite number.
    pub fn fit<S, P>(series_values: S, point_values: P, x_max: f64) -> Option<Self>
    where
        S: IntoIterator<Item = f64>,
        P: IntoIterator<Item = f64>,
    {
        if !(x_max.is_finite() && x_max > 0.0) {
            return None;
        }
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for v in series_values.into_iter().chain(point_values) {
            if !v.is_finite() {
                continue;
            }
            lo = lo.min(v);
            hi = hi.max(v);
        }
        if !(lo.is_finite() && hi.is_finite()) {
            lo = 0.0;
            hi = 0.0;
        }
        let span = hi - lo;
        let pad = if span > 0.0 {
            span * Y_PADDING_FRACTION
        } else {
            DEGENERATE_PADDING
        };
        Some(Self {
            x_min: 0.0,
            x_max,
            y_min: lo - pad,
            y_max: hi + pad,
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Live mapping state of one chart instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub pixel_rect: PixelRect,
    pub data_rect: DataRect,
}

impl ChartBounds {
    /// Combine measured geometry with a data range. `None` until the geometry is valid.
    pub fn new(pixel_rect: PixelRect, data_rect: DataRect) -> Option<Self> {
        pixel_rect.is_valid().then_some(Self {
            pixel_rect,
            data_rect,
        })
    }

    /// Convert a surface-local pixel position to a domain point.
    ///
    /// Returns `None` for positions outside the plotting area; such clicks
    /// are ignored. `t` is clamped into `[0, x_max]`, `a` is not clamped.
    pub fn pixel_to_data(&self, px: f64, py: f64) -> Option<DomainPoint> {
        let p = &self.pixel_rect;
        let d = &self.data_rect;
        if !p.contains(px, py) {
            return None;
        }
        let t = d.x_min + (px - p.left) / p.width() * d.width();
        let a = d.y_min + (p.bottom - py) / p.height() * d.height();
        Some(DomainPoint::new(t.clamp(0.0, d.x_max), a))
    }

    /// Inverse of [`pixel_to_data`](Self::pixel_to_data), without clamping.
    pub fn data_to_pixel(&self, point: DomainPoint) -> [f64; 2] {
        let p = &self.pixel_rect;
        let d = &self.data_rect;
        let px = p.left + (point.t - d.x_min) / d.width() * p.width();
        let py = p.bottom - (point.a - d.y_min) / d.height() * p.height();
        [px, py]
    }
}

/// Compute the full mapping for a chart.
///
/// Returns `None` while geometry is unknown (zero-sized plotting area) or when
/// `x_max` is not positive, so callers can skip mapping until layout settles.
pub fn compute_bounds(
    pixel_rect: PixelRect,
    series_values: &[f64],
    point_values: &[f64],
    x_max: f64,
) -> Option<ChartBounds> {
    let data_rect = DataRect::fit(
        series_values.iter().copied(),
        point_values.iter().copied(),
        x_max,
    )?;
    ChartBounds::new(pixel_rect, data_rect)
}

/// Convenience wrapper around [`ChartBounds::pixel_to_data`].
pub fn pixel_to_data(bounds: &ChartBounds, px: f64, py: f64) -> Option<DomainPoint> {
    bounds.pixel_to_data(px, py)
}
