//! Draw primitives the host paints each frame

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// One draw call, in canvas pixels (y grows downward)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    /// Canvas clear
    Clear { color: Color },
    /// Filled rectangle, center + size
    Rect { center: Vec2, size: Vec2, color: Color },
    /// Filled ellipse, center + full size
    Ellipse { center: Vec2, size: Vec2, color: Color },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
    },
    /// Left-aligned text with its top-left corner at `pos`
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Color,
    },
}

impl DrawCmd {
    pub fn rect(center: Vec2, size: Vec2, color: Color) -> Self {
        DrawCmd::Rect {
            center,
            size,
            color,
        }
    }

    pub fn ellipse(center: Vec2, size: Vec2, color: Color) -> Self {
        DrawCmd::Ellipse {
            center,
            size,
            color,
        }
    }
}

/// Convert a color to a CSS `rgba()` string for 2D canvas hosts
pub fn css_color(color: Color) -> String {
    let [r, g, b, a] = color;
    format!(
        "rgba({}, {}, {}, {:.3})",
        (r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (b.clamp(0.0, 1.0) * 255.0).round() as u8,
        a.clamp(0.0, 1.0)
    )
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const BACKGROUND: Color = [0.2, 0.2, 0.2, 1.0];
    pub const LANE_GUIDE: Color = [1.0, 1.0, 1.0, 0.4];
    pub const PLAYER: Color = [0.0, 0.59, 1.0, 1.0];
    pub const FOLLOWER: Color = [0.3, 0.75, 1.0, 1.0];
    pub const BULLET: Color = [1.0, 1.0, 0.3, 1.0];
    pub const ZOMBIE: Color = [0.3, 0.7, 0.2, 1.0];
    pub const BOSS: Color = [0.6, 0.1, 0.6, 1.0];
    pub const HEALTH_BACK: Color = [0.3, 0.0, 0.0, 1.0];
    pub const HEALTH_FILL: Color = [1.0, 0.2, 0.2, 1.0];
    pub const SURVIVOR: Color = [1.0, 0.8, 0.3, 1.0];
    pub const DEBUG_TEXT: Color = [1.0, 1.0, 1.0, 0.9];
}
