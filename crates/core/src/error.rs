//! Error types for wordmerge layout reconstruction.

use thiserror::Error;

/// Primary error type for validating layout inputs.
///
/// The merge pass itself never fails; every error here is raised while
/// constructing its inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("inverted ruling at x={position}: top {top} is below bottom {bottom}")]
    InvertedRuling { position: f64, top: f64, bottom: f64 },

    #[error("ruling coordinates must be finite (x={position}, top={top}, bottom={bottom})")]
    NonFiniteRuling { position: f64, top: f64, bottom: f64 },

    #[error("invalid merge parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("invalid rectangle size: width {width}, height {height}")]
    InvalidRectangle { width: f64, height: f64 },
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
