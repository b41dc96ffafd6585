//! Error types for isocyl

use thiserror::Error;

/// Main error type for isocyl operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid canvas size: {width}x{height}")]
    InvalidCanvas { width: i32, height: i32 },

    #[error("Invalid {name}: {value} (must not be negative)")]
    InvalidDimension { name: &'static str, value: i32 },

    #[error("Invalid proportions: {0}")]
    InvalidProportions(String),

    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type alias for isocyl operations
pub type Result<T> = std::result::Result<T, Error>;
