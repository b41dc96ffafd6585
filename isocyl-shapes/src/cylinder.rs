//! Isometric cylinder geometry
//!
//! Point names follow the usual cylinder legend: `O1` is the top center,
//! `A`/`B` the widest points of the top cap, `E`/`F` the trimmed wall anchors
//! and `G`/`H` their projections onto the bottom cap.

use isocyl_core::{
    distance, BoundingBox, CanvasSize, CylinderLook, DrawingSurface, Error, Point2i, Result,
    Translate,
};

use crate::proportions::CapProportions;

/// Start angle and sweep of the hidden half of the bottom cap
pub const BACK_ARC: (f32, f32) = (180.0, 180.0);
/// Start angle and sweep of the visible half of the bottom cap
pub const FRONT_ARC: (f32, f32) = (0.0, 180.0);

/// Every point derived for one cylinder on one canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IsometricCylinder {
    radius: i32,
    height: i32,
    /// `O1`
    pub top_center: Point2i,
    /// `A`
    pub cap_left: Point2i,
    /// `B`
    pub cap_right: Point2i,
    /// `O2`
    pub cap_foot: Point2i,
    /// `C`
    pub base_left: Point2i,
    /// `D`
    pub base_right: Point2i,
    /// `O7`
    pub base_foot: Point2i,
    /// `E`
    pub left_wall_top: Point2i,
    /// `F`
    pub right_wall_top: Point2i,
    /// `G`
    pub left_wall_bottom: Point2i,
    /// `H`
    pub right_wall_bottom: Point2i,
    /// Top-left corner of the top cap box
    pub cap_origin: Point2i,
    pub cap_width: i32,
    pub cap_height: i32,
}

impl IsometricCylinder {
    /// Derive the cylinder geometry for a canvas.
    ///
    /// `radius` is clamped to a quarter of the canvas width and `height` to
    /// half the canvas height. Returns `Ok(None)` when the clamped radius is
    /// zero, since there is nothing to outline.
    pub fn derive(
        canvas: CanvasSize,
        radius: i32,
        height: i32,
        proportions: &CapProportions,
    ) -> Result<Option<Self>> {
        canvas.validate()?;
        if radius < 0 {
            return Err(Error::InvalidDimension {
                name: "radius",
                value: radius,
            });
        }
        if height < 0 {
            return Err(Error::InvalidDimension {
                name: "height",
                value: height,
            });
        }
        proportions.validate()?;

        let r = radius.min(canvas.width / 4);
        let h = height.min(canvas.height / 2);
        if r == 0 {
            return Ok(None);
        }

        // Lift by whichever dimension dominates the silhouette
        let top_center = canvas.center().translated(0, -h.max(r));

        let cap_left = top_center.translated(-2 * r, r);
        let cap_right = top_center.translated(2 * r, r);
        let cap_foot = top_center.translated(0, 2 * r);
        let base_left = cap_left.translated(0, h);
        let base_right = cap_right.translated(0, h);
        let base_foot = cap_foot.translated(0, h);

        let span = distance(&cap_left, &cap_right);
        let depth = distance(&top_center, &cap_foot);

        let trim = (span * proportions.side_trim) as i32;
        let left_wall_top = cap_left.translated(trim, 0);
        let right_wall_top = cap_right.translated(-trim, 0);
        let left_wall_bottom = left_wall_top.translated(0, h);
        let right_wall_bottom = right_wall_top.translated(0, h);

        let cap_origin = Point2i::new(
            left_wall_top.x,
            top_center.y + (depth * proportions.cap_inset) as i32,
        );

        Ok(Some(Self {
            radius: r,
            height: h,
            top_center,
            cap_left,
            cap_right,
            cap_foot,
            base_left,
            base_right,
            base_foot,
            left_wall_top,
            right_wall_top,
            left_wall_bottom,
            right_wall_bottom,
            cap_origin,
            cap_width: right_wall_top.x - left_wall_top.x,
            cap_height: (depth * proportions.cap_flattening) as i32,
        }))
    }

    /// Radius after clamping
    pub fn radius(&self) -> i32 {
        self.radius
    }

    /// Height after clamping
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Box of the top cap ellipse
    pub fn top_cap(&self) -> BoundingBox {
        BoundingBox::from_corner(self.cap_origin, self.cap_width, self.cap_height)
    }

    /// Box of the bottom cap ellipse
    pub fn bottom_cap(&self) -> BoundingBox {
        self.top_cap().translated(0, self.height)
    }

    /// `E` to `G`
    pub fn left_wall(&self) -> (Point2i, Point2i) {
        (self.left_wall_top, self.left_wall_bottom)
    }

    /// `F` to `H`
    pub fn right_wall(&self) -> (Point2i, Point2i) {
        (self.right_wall_top, self.right_wall_bottom)
    }

    /// Box enclosing every primitive of the outline
    pub fn extent(&self) -> BoundingBox {
        let (e, g) = self.left_wall();
        let (f, h) = self.right_wall();
        self.top_cap()
            .union(&self.bottom_cap())
            .union(&BoundingBox::from_points(e, g))
            .union(&BoundingBox::from_points(f, h))
    }

    /// Issue the outline primitives, back to front.
    ///
    /// The hidden half of the bottom cap goes first so that visible edges
    /// drawn afterwards cover it.
    pub fn draw<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        look: &CylinderLook,
    ) -> Result<()> {
        let bottom = self.bottom_cap();

        surface.draw_arc(&look.back, bottom, BACK_ARC.0, BACK_ARC.1)?;
        surface.draw_ellipse(&look.front, self.top_cap())?;
        surface.draw_arc(&look.front, bottom, FRONT_ARC.0, FRONT_ARC.1)?;

        let (e, g) = self.left_wall();
        surface.draw_line(&look.front, e, g)?;
        let (f, h) = self.right_wall();
        surface.draw_line(&look.front, f, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(width: i32, height: i32, r: i32, h: i32) -> IsometricCylinder {
        IsometricCylinder::derive(
            CanvasSize::new(width, height),
            r,
            h,
            &CapProportions::default(),
        )
        .unwrap()
        .unwrap()
    }

    #[test]
    fn test_derive_unclamped() {
        let cyl = derive(400, 400, 50, 100);

        assert_eq!(cyl.radius(), 50);
        assert_eq!(cyl.height(), 100);
        assert_eq!(cyl.top_center, Point2i::new(200, 100));
        assert_eq!(cyl.cap_left, Point2i::new(100, 150));
        assert_eq!(cyl.cap_right, Point2i::new(300, 150));
        assert_eq!(cyl.cap_foot, Point2i::new(200, 200));
        assert_eq!(cyl.base_left, Point2i::new(100, 250));
        assert_eq!(cyl.base_right, Point2i::new(300, 250));
        assert_eq!(cyl.base_foot, Point2i::new(200, 300));
        assert_eq!(cyl.left_wall_top, Point2i::new(125, 150));
        assert_eq!(cyl.right_wall_top, Point2i::new(275, 150));
        assert_eq!(cyl.left_wall_bottom, Point2i::new(125, 250));
        assert_eq!(cyl.right_wall_bottom, Point2i::new(275, 250));
        assert_eq!(cyl.cap_origin, Point2i::new(125, 112));
        assert_eq!(cyl.top_cap(), BoundingBox::new(125, 112, 150, 75));
        assert_eq!(cyl.bottom_cap(), BoundingBox::new(125, 212, 150, 75));
    }

    #[test]
    fn test_cap_width_formula() {
        let r = 50;
        let cyl = derive(400, 400, r, 100);
        let trim = (4 * r) / 8;
        assert_eq!(cyl.cap_width, 4 * r - 2 * trim);
    }

    #[test]
    fn test_radius_clamps_to_quarter_width() {
        let cyl = derive(100, 100, 80, 10);

        assert_eq!(cyl.radius(), 25);
        assert_eq!(cyl.height(), 10);
        assert_eq!(cyl.top_center, Point2i::new(50, 25));
        assert_eq!(cyl.cap_left, Point2i::new(0, 50));
        assert_eq!(cyl.cap_right, Point2i::new(100, 50));
        // 100 / 8 truncates to 12
        assert_eq!(cyl.left_wall_top, Point2i::new(12, 50));
        assert_eq!(cyl.right_wall_top, Point2i::new(88, 50));
        assert_eq!(cyl.top_cap(), BoundingBox::new(12, 31, 76, 37));
    }

    #[test]
    fn test_height_clamps_to_half_height() {
        let cyl = derive(400, 100, 10, 500);
        assert_eq!(cyl.height(), 50);
        assert_eq!(cyl.top_center, Point2i::new(200, 0));
        assert_eq!(cyl.base_foot, Point2i::new(200, 70));
    }

    #[test]
    fn test_short_cylinder_lifts_by_radius() {
        let cyl = derive(400, 400, 60, 20);
        assert_eq!(cyl.top_center, Point2i::new(200, 140));
    }

    #[test]
    fn test_zero_height_draws_flat_disc() {
        let cyl = derive(400, 400, 40, 0);
        assert_eq!(cyl.top_cap(), cyl.bottom_cap());
        assert_eq!(cyl.left_wall_top, cyl.left_wall_bottom);
    }

    #[test]
    fn test_zero_radius_has_no_outline() {
        let canvas = CanvasSize::new(3, 400);
        let proportions = CapProportions::default();

        assert_eq!(
            IsometricCylinder::derive(canvas, 50, 50, &proportions),
            Ok(None)
        );
        assert_eq!(
            IsometricCylinder::derive(CanvasSize::new(400, 400), 0, 50, &proportions),
            Ok(None)
        );
    }

    #[test]
    fn test_rejects_degenerate_input() {
        let proportions = CapProportions::default();

        assert_eq!(
            IsometricCylinder::derive(CanvasSize::new(0, 0), 10, 10, &proportions),
            Err(Error::InvalidCanvas { width: 0, height: 0 })
        );
        assert_eq!(
            IsometricCylinder::derive(CanvasSize::new(100, 100), -1, 10, &proportions),
            Err(Error::InvalidDimension { name: "radius", value: -1 })
        );
        assert_eq!(
            IsometricCylinder::derive(CanvasSize::new(100, 100), 10, -4, &proportions),
            Err(Error::InvalidDimension { name: "height", value: -4 })
        );
        assert!(IsometricCylinder::derive(
            CanvasSize::new(100, 100),
            10,
            10,
            &CapProportions::new(0.9, 0.75, 0.125),
        )
        .is_err());
    }

    #[test]
    fn test_custom_proportions() {
        let cyl = IsometricCylinder::derive(
            CanvasSize::new(400, 400),
            50,
            100,
            &CapProportions::new(0.0, 1.0, 0.0),
        )
        .unwrap()
        .unwrap();

        assert_eq!(cyl.left_wall_top, cyl.cap_left);
        assert_eq!(cyl.top_cap(), BoundingBox::new(100, 100, 200, 100));
    }

    #[test]
    fn test_extent() {
        let cyl = derive(400, 400, 50, 100);
        assert_eq!(cyl.extent(), BoundingBox::new(125, 112, 150, 175));
    }

    #[test]
    fn test_wide_short_canvas_overflows_vertically() {
        // The radius is only bounded by the width, so a tall cap pokes out
        // above a short canvas
        let cyl = derive(400, 50, 100, 10);

        assert_eq!(cyl.radius(), 100);
        assert_eq!(cyl.top_center, Point2i::new(200, -75));
        assert_eq!(cyl.extent(), BoundingBox::new(50, -50, 300, 160));
        assert!(!CanvasSize::new(400, 50).bounds().contains(&cyl.extent()));
    }
}
