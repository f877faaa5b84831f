//! Custom error types for dashboard rendering.
//!
//! This module provides fine-grained error handling for rendering,
//! configuration validation, and file output.

use thiserror::Error;

/// Main error type for dashboard operations.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// No usable TrueType font found on the system.
    #[error("No usable system font found. Install DejaVu Sans or Arial.")]
    FontNotFound,

    /// Input value out of valid range.
    #[error("Invalid {name} value {value}. Valid range: {min}-{max}")]
    InvalidValue {
        name: String,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Stored profile/theme has invalid format or is missing.
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    /// Generic invalid input error.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Image encoding or decoding error.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Filesystem error while writing frames or config.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for dashboard operations.
pub type Result<T> = std::result::Result<T, DashboardError>;
