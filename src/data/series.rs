//! Reshapes a simulation result into per-channel `(t, value)` sequences.

use super::model::SimulationResult;

/// One rendering sample of a channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSample {
    pub t: f64,
    pub value: f64,
}

/// Output channels of the simulation, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    RowerPosition,
    RowerVelocity,
    RowerAcceleration,
    BoatPosition,
    BoatVelocity,
    BoatAcceleration,
}

impl Channel {
    pub const ALL: [Channel; 6] = [
        Channel::RowerPosition,
        Channel::RowerVelocity,
        Channel::RowerAcceleration,
        Channel::BoatPosition,
        Channel::BoatVelocity,
        Channel::BoatAcceleration,
    ];

    /// Chart heading.
    pub fn title(self) -> &'static str {
        match self {
            Channel::RowerPosition => "x(t) - Rower Position",
            Channel::RowerVelocity => "x'(t) - Rower Velocity",
            Channel::RowerAcceleration => "x''(t) - Rower Acceleration",
            Channel::BoatPosition => "y(t) - Boat Position",
            Channel::BoatVelocity => "y'(t) - Boat Velocity",
            Channel::BoatAcceleration => "y''(t) - Boat Acceleration",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Channel::RowerPosition | Channel::BoatPosition => "m",
            Channel::RowerVelocity | Channel::BoatVelocity => "m/s",
            Channel::RowerAcceleration | Channel::BoatAcceleration => "m/s²",
        }
    }

    /// Only the rower acceleration accepts target points.
    pub fn is_interactive(self) -> bool {
        self == Channel::RowerAcceleration
    }

    fn values(self, result: &SimulationResult) -> &[f64] {
        match self {
            Channel::RowerPosition => &result.xx,
            Channel::RowerVelocity => &result.xx_dot,
            Channel::RowerAcceleration => &result.xx_ddot,
            Channel::BoatPosition => &result.yy,
            Channel::BoatVelocity => &result.yy_dot,
            Channel::BoatAcceleration => &result.yy_ddot,
        }
    }
}

/// Zip the time grid with the selected channel.
///
/// Empty when there is no result yet. A channel shorter than the grid (or vice
/// versa) is truncated to the common length.
pub fn chart_series(result: Option<&SimulationResult>, channel: Channel) -> Vec<SeriesSample> {
    let Some(result) = result else {
        return Vec::new();
    };
    result
        .tt
        .iter()
        .zip(channel.values(result))
        .map(|(&t, &value)| SeriesSample { t, value })
        .collect()
}

/// Samples as `[t, value]` pairs for `egui_plot`.
pub fn plot_points(samples: &[SeriesSample]) -> Vec<[f64; 2]> {
    samples.iter().map(|s| [s.t, s.value]).collect()
}
