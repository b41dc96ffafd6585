//! Isometric cylinder renderer

use isocyl_core::{CanvasSize, CylinderLook, DrawingSurface, Result, Stroke};
use tracing::{debug, trace, warn};

use crate::cylinder::IsometricCylinder;
use crate::proportions::RenderOptions;

/// Draws upright cylinders in isometric projection.
///
/// The renderer owns its look; changing it needs `&mut self`, so a renderer
/// shared between threads can only be read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IsometricCylinderRenderer {
    look: CylinderLook,
    options: RenderOptions,
}

impl IsometricCylinderRenderer {
    /// Create a renderer with the default amber/dark-olive look
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_look(look: CylinderLook) -> Self {
        Self {
            look,
            options: RenderOptions::default(),
        }
    }

    /// Create a renderer with custom options, validating the cap proportions
    pub fn with_options(look: CylinderLook, options: RenderOptions) -> Result<Self> {
        options.proportions.validate()?;
        Ok(Self { look, options })
    }

    pub fn look(&self) -> &CylinderLook {
        &self.look
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Replace both strokes. The back stroke is forced to a dashed or solid
    /// pattern according to `dashed_back`.
    pub fn set_look(&mut self, front: Stroke, back: Stroke, dashed_back: bool) {
        self.look = CylinderLook::with_dashed_back(front, back, dashed_back);
        trace!(look = ?self.look, "cylinder look updated");
    }

    /// Derive the geometry for `canvas` and draw it onto `surface`.
    ///
    /// Invalid input is rejected before anything reaches the surface. A
    /// cylinder whose radius clamps to zero draws nothing. A rejected
    /// anti-aliasing hint is logged and ignored; errors from the drawing
    /// primitives are returned unchanged.
    pub fn draw_isometric_cylinder<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        canvas: CanvasSize,
        r: i32,
        h: i32,
    ) -> Result<()> {
        let Some(cylinder) =
            IsometricCylinder::derive(canvas, r, h, &self.options.proportions)?
        else {
            debug!(
                width = canvas.width,
                height = canvas.height,
                r,
                h,
                "cylinder radius clamps to zero, nothing to draw"
            );
            return Ok(());
        };

        debug!(
            width = canvas.width,
            height = canvas.height,
            r = cylinder.radius(),
            h = cylinder.height(),
            top_cap = ?cylinder.top_cap(),
            "drawing isometric cylinder"
        );

        // Quality hint only; the outline is drawn either way
        if self.options.anti_alias {
            if let Err(err) = surface.set_anti_aliasing(true) {
                warn!(%err, "surface rejected anti-aliasing, drawing without it");
            }
        }
        cylinder.draw(surface, &self.look)
    }
}
