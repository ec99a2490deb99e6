// Debug drawing primitives emitted once per tick for the viewer.

use super::vector::Vector2D;

/// 0xAARRGGBB; alpha 0 means opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const RED: Color = Color(0xff0000);
    pub const GREEN: Color = Color(0x00ff00);
    pub const BLUE: Color = Color(0x0000ff);
    pub const PURPLE: Color = Color(0xf000e9);
    pub const YELLOW: Color = Color(0xfff222);
    pub const DARK_RED: Color = Color(0x770000);
    pub const DARK_GREEN: Color = Color(0x007700);
    pub const DARK_PURPLE: Color = Color(0x71006d);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    // Layer and persistence for the calls that follow.
    Options {
        layer: Option<u32>,
        permanent: Option<bool>,
    },
    Line {
        from: Vector2D,
        to: Vector2D,
        color: Color,
    },
    Circle {
        center: Vector2D,
        radius: f64,
        color: Color,
        fill: bool,
    },
    Rectangle {
        top_left: Vector2D,
        bottom_right: Vector2D,
        color: Color,
        fill: bool,
    },
    // Hover text over a circular area.
    Popup {
        center: Vector2D,
        radius: f64,
        text: String,
    },
    Message(String),
    EndFrame,
}

impl DrawCall {
    pub fn layer(layer: u32) -> Self {
        DrawCall::Options {
            layer: Some(layer),
            permanent: None,
        }
    }

    pub fn permanent(permanent: bool) -> Self {
        DrawCall::Options {
            layer: None,
            permanent: Some(permanent),
        }
    }

    pub fn square(center: Vector2D, half: f64, color: Color) -> Self {
        DrawCall::Rectangle {
            top_left: Vector2D::new(center.x - half, center.y - half),
            bottom_right: Vector2D::new(center.x + half, center.y + half),
            color,
            fill: false,
        }
    }
}
