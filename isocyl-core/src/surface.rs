//! The drawing-surface abstraction shapes render against

use serde::{Deserialize, Serialize};

use crate::bounds::BoundingBox;
use crate::error::Result;
use crate::point::Point2i;
use crate::style::Stroke;

/// Trait for 2D surfaces that accept outline primitives.
///
/// Angles are in degrees, measured clockwise from the positive X axis
/// (canvas coordinates have `+Y` pointing down). Primitives are layered in
/// call order.
pub trait DrawingSurface {
    /// Draw a straight line between two points
    fn draw_line(&mut self, stroke: &Stroke, from: Point2i, to: Point2i) -> Result<()>;

    /// Draw part of the ellipse inscribed in `bounds`
    fn draw_arc(
        &mut self,
        stroke: &Stroke,
        bounds: BoundingBox,
        start_angle: f32,
        sweep_angle: f32,
    ) -> Result<()>;

    /// Draw the full ellipse inscribed in `bounds`
    fn draw_ellipse(&mut self, stroke: &Stroke, bounds: BoundingBox) -> Result<()>;

    /// Quality hint; surfaces without anti-aliasing may ignore it
    fn set_anti_aliasing(&mut self, _enabled: bool) -> Result<()> {
        Ok(())
    }
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn draw_line(&mut self, stroke: &Stroke, from: Point2i, to: Point2i) -> Result<()> {
        (**self).draw_line(stroke, from, to)
    }

    fn draw_arc(
        &mut self,
        stroke: &Stroke,
        bounds: BoundingBox,
        start_angle: f32,
        sweep_angle: f32,
    ) -> Result<()> {
        (**self).draw_arc(stroke, bounds, start_angle, sweep_angle)
    }

    fn draw_ellipse(&mut self, stroke: &Stroke, bounds: BoundingBox) -> Result<()> {
        (**self).draw_ellipse(stroke, bounds)
    }

    fn set_anti_aliasing(&mut self, enabled: bool) -> Result<()> {
        (**self).set_anti_aliasing(enabled)
    }
}

/// A single call made against a [`DrawingSurface`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Line {
        stroke: Stroke,
        from: [i32; 2],
        to: [i32; 2],
    },
    Arc {
        stroke: Stroke,
        bounds: BoundingBox,
        start_angle: f32,
        sweep_angle: f32,
    },
    Ellipse {
        stroke: Stroke,
        bounds: BoundingBox,
    },
    AntiAliasing {
        enabled: bool,
    },
}

impl DrawCommand {
    /// Whether this command puts ink on the surface
    pub fn is_primitive(&self) -> bool {
        !matches!(self, DrawCommand::AntiAliasing { .. })
    }

    /// Stroke used by the command, if any
    pub fn stroke(&self) -> Option<&Stroke> {
        match self {
            DrawCommand::Line { stroke, .. }
            | DrawCommand::Arc { stroke, .. }
            | DrawCommand::Ellipse { stroke, .. } => Some(stroke),
            DrawCommand::AntiAliasing { .. } => None,
        }
    }
}

/// A surface that records every call as a [`DrawCommand`].
///
/// Useful as a display list to replay later, and as a test double.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    anti_aliasing: bool,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded commands in call order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Recorded commands excluding quality hints
    pub fn primitives(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(|c| c.is_primitive())
    }

    /// Number of ink-producing commands
    pub fn primitive_count(&self) -> usize {
        self.primitives().count()
    }

    /// Last anti-aliasing state requested
    pub fn anti_aliasing(&self) -> bool {
        self.anti_aliasing
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget all recorded commands and the anti-aliasing state
    pub fn clear(&mut self) {
        self.commands.clear();
        self.anti_aliasing = false;
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Re-issue every recorded command against another surface
    pub fn replay<S: DrawingSurface + ?Sized>(&self, target: &mut S) -> Result<()> {
        for command in &self.commands {
            match *command {
                DrawCommand::Line { stroke, from, to } => {
                    target.draw_line(&stroke, from.into(), to.into())?
                }
                DrawCommand::Arc {
                    stroke,
                    bounds,
                    start_angle,
                    sweep_angle,
                } => target.draw_arc(&stroke, bounds, start_angle, sweep_angle)?,
                DrawCommand::Ellipse { stroke, bounds } => target.draw_ellipse(&stroke, bounds)?,
                DrawCommand::AntiAliasing { enabled } => target.set_anti_aliasing(enabled)?,
            }
        }
        Ok(())
    }
}

impl DrawingSurface for RecordingSurface {
    fn draw_line(&mut self, stroke: &Stroke, from: Point2i, to: Point2i) -> Result<()> {
        self.commands.push(DrawCommand::Line {
            stroke: *stroke,
            from: from.into(),
            to: to.into(),
        });
        Ok(())
    }

    fn draw_arc(
        &mut self,
        stroke: &Stroke,
        bounds: BoundingBox,
        start_angle: f32,
        sweep_angle: f32,
    ) -> Result<()> {
        self.commands.push(DrawCommand::Arc {
            stroke: *stroke,
            bounds,
            start_angle,
            sweep_angle,
        });
        Ok(())
    }

    fn draw_ellipse(&mut self, stroke: &Stroke, bounds: BoundingBox) -> Result<()> {
        self.commands.push(DrawCommand::Ellipse {
            stroke: *stroke,
            bounds,
        });
        Ok(())
    }

    fn set_anti_aliasing(&mut self, enabled: bool) -> Result<()> {
        self.anti_aliasing = enabled;
        self.commands.push(DrawCommand::AntiAliasing { enabled });
        Ok(())
    }
}
