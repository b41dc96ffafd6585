//! Point types and related functionality

use nalgebra::{Point2, Vector2};

/// A 2D point in integer canvas coordinates (`+Y` points down)
pub type Point2i = Point2<i32>;

/// A 2D integer offset
pub type Vector2i = Vector2<i32>;

/// Pure translation for canvas points.
///
/// Points are `Copy` values, so translating never aliases the source point.
pub trait Translate {
    /// Return a copy of `self` moved by `(dx, dy)`
    fn translated(&self, dx: i32, dy: i32) -> Self;
}

impl Translate for Point2i {
    fn translated(&self, dx: i32, dy: i32) -> Self {
        *self + Vector2i::new(dx, dy)
    }
}

/// Euclidean distance between two canvas points
pub fn distance(p: &Point2i, q: &Point2i) -> f64 {
    let d = p - q;
    f64::from(d.x).hypot(f64::from(d.y))
}
