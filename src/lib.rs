//! # isocyl
//!
//! Isometric cylinder outlines drawn with plain 2D primitives.
//!
//! This is the umbrella crate that re-exports the core types and the shape
//! renderers in one place.
//!
//! ## Quick Start
//!
//! ```rust
//! use isocyl::prelude::*;
//!
//! let renderer = IsometricCylinderRenderer::new();
//! let mut surface = RecordingSurface::new();
//!
//! renderer
//!     .draw_isometric_cylinder(&mut surface, CanvasSize::new(400, 400), 50, 100)
//!     .unwrap();
//!
//! // back arc, top ellipse, front arc, two walls
//! assert_eq!(surface.primitive_count(), 5);
//! ```
//!
//! Any type implementing [`DrawingSurface`] can be drawn onto; the renderer
//! never touches pixels itself.

// Re-export core functionality
pub use isocyl_core::*;

pub use isocyl_shapes as shapes;

/// Convenient imports for common use cases
pub mod prelude {
    pub use isocyl_core::*;
    pub use isocyl_shapes::*;
}
