//! Isometric shape outlines
//!
//! This crate turns shape parameters into the arcs, ellipses and lines a
//! [`DrawingSurface`](isocyl_core::DrawingSurface) can draw:
//! - Cap proportions and render options
//! - Isometric cylinder geometry
//! - The cylinder renderer

pub mod proportions;
pub mod cylinder;
pub mod renderer;

pub use proportions::*;
pub use cylinder::*;
pub use renderer::*;
