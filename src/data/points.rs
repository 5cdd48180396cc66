//! User-selected target points on the annotated curve.

use serde::{Deserialize, Serialize};

/// A target `(t, a)` on the annotated channel. `t` is time, `a` the target value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainPoint {
    pub t: f64,
    pub a: f64,
}

impl DomainPoint {
    pub fn new(t: f64, a: f64) -> Self {
        Self { t, a }
    }
}

/// Ordered, insertion-significant set of annotated points.
///
/// Identity is positional: duplicates are kept and removal is by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCollection {
    points: Vec<DomainPoint>,
}

impl PointCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point at the end.
    pub fn add(&mut self, point: DomainPoint) {
        self.points.push(point);
    }

    /// Remove the point at `index`, shifting later points down.
    ///
    /// Returns the removed point, or `None` (and leaves the set untouched)
    /// when `index` is out of range.
    pub fn remove_at(&mut self, index: usize) -> Option<DomainPoint> {
        if index < self.points.len() {
            Some(self.points.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// All points in insertion order.
    pub fn all(&self) -> &[DomainPoint] {
        &self.points
    }

    /// Owned copy for an outgoing request; later edits never reach it.
    pub fn snapshot(&self) -> Vec<DomainPoint> {
        self.points.clone()
    }

    /// Replace the whole set, e.g. after loading from disk.
    pub fn replace(&mut self, points: Vec<DomainPoint>) {
        self.points = points;
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Target values (`a`) of every point, for range computation.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.a)
    }
}
