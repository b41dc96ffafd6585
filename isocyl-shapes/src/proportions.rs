//! Tunable visual constants for isometric caps

use isocyl_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Fractions that shape the cap ellipses.
///
/// These are visual constants rather than exact projection factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapProportions {
    /// Share of the cap span trimmed from each side to place the walls
    pub side_trim: f64,
    /// Cap ellipse height as a share of the cap depth
    pub cap_flattening: f64,
    /// Offset of the cap box below the top center, as a share of the cap depth
    pub cap_inset: f64,
}

impl CapProportions {
    pub fn new(side_trim: f64, cap_flattening: f64, cap_inset: f64) -> Self {
        Self {
            side_trim,
            cap_flattening,
            cap_inset,
        }
    }

    /// Check that the fractions keep every bounding box non-negative
    pub fn validate(&self) -> Result<()> {
        check_fraction("side_trim", self.side_trim, 0.5)?;
        check_fraction("cap_flattening", self.cap_flattening, 1.0)?;
        check_fraction("cap_inset", self.cap_inset, 1.0)
    }
}

impl Default for CapProportions {
    fn default() -> Self {
        Self::new(0.125, 0.75, 0.125)
    }
}

fn check_fraction(name: &str, value: f64, max: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(Error::InvalidProportions(format!(
            "{} must be within [0, {}], got {}",
            name, max, value
        )));
    }
    Ok(())
}

/// Renderer configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Ask the surface for anti-aliased output before drawing
    pub anti_alias: bool,
    pub proportions: CapProportions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            anti_alias: true,
            proportions: CapProportions::default(),
        }
    }
}
