//! Bounding boxes and canvas sizes

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::point::Point2i;

/// The rectangle an ellipse or arc primitive is inscribed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl BoundingBox {
    /// Create a bounding box from its top-left corner and size
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a bounding box anchored at `corner`
    pub fn from_corner(corner: Point2i, width: i32, height: i32) -> Self {
        Self::new(corner.x, corner.y, width, height)
    }

    /// Smallest box containing both points
    pub fn from_points(p: Point2i, q: Point2i) -> Self {
        let x = p.x.min(q.x);
        let y = p.y.min(q.y);
        Self::new(x, y, p.x.max(q.x) - x, p.y.max(q.y) - y)
    }

    pub fn top_left(&self) -> Point2i {
        Point2i::new(self.x, self.y)
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Return a copy moved by `(dx, dy)`
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Smallest box containing `self` and `other`
    pub fn union(&self, other: &Self) -> Self {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// Whether `other` lies entirely inside `self` (edges inclusive)
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }
}

/// Size of the canvas a shape is centered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: i32,
    pub height: i32,
}

impl CanvasSize {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Center point, using integer division
    pub fn center(&self) -> Point2i {
        Point2i::new(self.width / 2, self.height / 2)
    }

    /// The whole canvas as a bounding box at the origin
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(0, 0, self.width, self.height)
    }

    /// Reject canvases with a non-positive dimension
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl From<(i32, i32)> for CanvasSize {
    fn from((width, height): (i32, i32)) -> Self {
        Self::new(width, height)
    }
}
