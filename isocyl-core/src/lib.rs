//! Core data structures and traits for isocyl
//!
//! This crate provides the fundamental types shared by the shape renderers:
//! integer canvas points, bounding boxes, strokes and the drawing-surface
//! abstraction that every shape issues its primitives against.

pub mod point;
pub mod bounds;
pub mod style;
pub mod surface;
pub mod error;

pub use point::*;
pub use bounds::*;
pub use style::*;
pub use surface::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point2, Vector2};
