//! Stroke styles used to outline shapes

use serde::{Deserialize, Serialize};

/// An opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Default color for visible edges
    pub const AMBER: Color = Color::from_rgb(255, 214, 16);
    /// Default color for hidden edges
    pub const DARK_OLIVE: Color = Color::from_rgb(114, 96, 6);
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::from_rgb(r, g, b)
    }
}

/// Dash pattern of a stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    DashDot,
}

/// A line style: color, width and dash pattern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    #[serde(default)]
    pub dash: DashStyle,
}

impl Stroke {
    /// Create a one pixel wide stroke
    pub fn new(color: Color, dash: DashStyle) -> Self {
        Self {
            color,
            width: 1.0,
            dash,
        }
    }

    pub fn solid(color: Color) -> Self {
        Self::new(color, DashStyle::Solid)
    }

    pub fn dashed(color: Color) -> Self {
        Self::new(color, DashStyle::Dash)
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_dash(mut self, dash: DashStyle) -> Self {
        self.dash = dash;
        self
    }

    pub fn is_dashed(&self) -> bool {
        self.dash != DashStyle::Solid
    }
}

/// The pair of strokes a cylinder is outlined with.
///
/// `front` draws visible edges, `back` draws the hidden far edge of the
/// bottom cap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderLook {
    pub front: Stroke,
    pub back: Stroke,
}

impl CylinderLook {
    /// Create a look with a dashed back stroke
    pub fn new(front: Stroke, back: Stroke) -> Self {
        Self::with_dashed_back(front, back, true)
    }

    /// Create a look, forcing the back stroke to `Dash` or `Solid`
    pub fn with_dashed_back(front: Stroke, back: Stroke, dashed_back: bool) -> Self {
        let dash = if dashed_back {
            DashStyle::Dash
        } else {
            DashStyle::Solid
        };
        Self {
            front,
            back: back.with_dash(dash),
        }
    }
}

impl Default for CylinderLook {
    fn default() -> Self {
        Self {
            front: Stroke::solid(Color::AMBER),
            back: Stroke::dashed(Color::DARK_OLIVE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_look() {
        let look = CylinderLook::default();

        assert_eq!(look.front.color, Color::AMBER);
        assert_eq!(look.front.dash, DashStyle::Solid);
        assert_eq!(look.back.color, Color::DARK_OLIVE);
        assert!(look.back.is_dashed());
        assert_eq!(look.front.width, 1.0);
    }

    #[test]
    fn test_dashed_back_overrides_back_dash() {
        let front = Stroke::solid(Color::BLACK);
        let back = Stroke::new(Color::BLACK, DashStyle::Dot);

        let look = CylinderLook::with_dashed_back(front, back, false);
        assert_eq!(look.back.dash, DashStyle::Solid);

        let look = CylinderLook::new(front, back);
        assert_eq!(look.back.dash, DashStyle::Dash);
        // Front stroke is passed through untouched
        assert_eq!(look.front, front);
    }

    #[test]
    fn test_look_from_json() {
        let json = r#"{
            "front": { "color": { "r": 0, "g": 0, "b": 255 }, "width": 2.0 },
            "back": { "color": { "r": 10, "g": 10, "b": 10 }, "width": 1.0, "dash": "dash_dot" }
        }"#;

        let look: CylinderLook = serde_json::from_str(json).unwrap();
        assert_eq!(look.front.color, Color::from([0, 0, 255]));
        assert_eq!(look.front.dash, DashStyle::Solid);
        assert_eq!(look.back.dash, DashStyle::DashDot);
    }
}
