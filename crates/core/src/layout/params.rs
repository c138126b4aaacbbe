//! Word merging parameters.
//!
//! Contains MergeParams for controlling how glyphs are grouped into runs.

use crate::error::{LayoutError, Result};
use crate::utils::{EPSILON, LINE_VARIANCE};

/// Parameters for word merging.
///
/// The defaults are empirically tuned against real-world documents; change
/// them only when a document family is known to need it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeParams {
    /// Two glyphs with identical text whose boxes overlap by more than this
    /// fraction of the previous glyph's area are treated as one (double-strike bold).
    pub duplicate_overlap: f64,

    /// Multiplier on the font's width-of-space giving the expected word gap.
    pub space_tolerance: f64,

    /// Multiplier on the running average character width giving the expected word gap.
    pub average_char_tolerance: f64,

    /// Tolerance of the same-line test, in document units.
    pub line_variance: f64,

    /// Tolerance for float equality of positions and font sizes.
    pub epsilon: f64,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            duplicate_overlap: 0.5,
            space_tolerance: 0.5,
            average_char_tolerance: 0.3,
            line_variance: LINE_VARIANCE,
            epsilon: EPSILON,
        }
    }
}

impl MergeParams {
    /// Creates new merge parameters with the specified values.
    ///
    /// Every value must be finite and non-negative; `duplicate_overlap` must
    /// also be at most 1.
    pub fn new(
        duplicate_overlap: f64,
        space_tolerance: f64,
        average_char_tolerance: f64,
        line_variance: f64,
        epsilon: f64,
    ) -> Result<Self> {
        let params = Self {
            duplicate_overlap,
            space_tolerance,
            average_char_tolerance,
            line_variance,
            epsilon,
        };
        params.validate()?;
        Ok(params)
    }

    /// Checks that every parameter is usable by the merge pass.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("duplicate_overlap", self.duplicate_overlap),
            ("space_tolerance", self.space_tolerance),
            ("average_char_tolerance", self.average_char_tolerance),
            ("line_variance", self.line_variance),
            ("epsilon", self.epsilon),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidParameter { name, value });
            }
        }
        if self.duplicate_overlap > 1.0 {
            return Err(LayoutError::InvalidParameter {
                name: "duplicate_overlap",
                value: self.duplicate_overlap,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(MergeParams::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_tolerance() {
        let err = MergeParams::new(0.5, -0.5, 0.3, 0.1, 0.01).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidParameter {
                name: "space_tolerance",
                value: -0.5
            }
        );
    }

    #[test]
    fn rejects_overlap_above_one() {
        assert!(MergeParams::new(1.5, 0.5, 0.3, 0.1, 0.01).is_err());
    }

    #[test]
    fn rejects_nan() {
        assert!(MergeParams::new(0.5, 0.5, f64::NAN, 0.1, 0.01).is_err());
    }
}
