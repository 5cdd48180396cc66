//! TraceLook: visual styling for channel curves and annotated points.

use eframe::egui;
use egui_plot::{LineStyle, MarkerShape};

use super::series::Channel;

/// The visual presentation of a curve or a marker set.
#[derive(Debug, Clone)]
pub struct TraceLook {
    pub color: egui::Color32,
    pub width: f32,
    pub style: LineStyle,
    pub point_size: f32,
    pub marker: MarkerShape,
}

impl Default for TraceLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::GRAY,
            width: 2.0,
            style: LineStyle::Solid,
            point_size: 4.0,
            marker: MarkerShape::Circle,
        }
    }
}

impl TraceLook {
    /// Curve styling for a channel.
    pub fn for_channel(channel: Channel) -> Self {
        let color = match channel {
            Channel::RowerPosition => egui::Color32::from_rgb(0x63, 0x66, 0xf1),
            Channel::RowerVelocity => egui::Color32::from_rgb(0x8b, 0x5c, 0xf6),
            Channel::RowerAcceleration => egui::Color32::from_rgb(0xa8, 0x55, 0xf7),
            Channel::BoatPosition => egui::Color32::from_rgb(0x22, 0xc5, 0x5e),
            Channel::BoatVelocity => egui::Color32::from_rgb(0x14, 0xb8, 0xa6),
            Channel::BoatAcceleration => egui::Color32::from_rgb(0x06, 0xb6, 0xd4),
        };
        Self {
            color,
            ..Default::default()
        }
    }

    /// Marker styling for user target points.
    pub fn target_points() -> Self {
        Self {
            color: egui::Color32::from_rgb(0xef, 0x44, 0x44),
            point_size: 6.0,
            ..Default::default()
        }
    }
}
