//! Layout element types for word merging.
//!
//! Contains:
//! - Rectangle: Axis-aligned box in document space
//! - FontHandle / FontRegistry: Opaque font identity supplied upstream
//! - Glyph: One positioned text unit with font metadata
//! - Ruling: Vertical line segment acting as a merge obstacle
//! - TextRun: Ordered glyphs forming a word or line fragment

/// Implements HasBounds by delegating to a field.
///
/// # Field mode
/// Use when the field itself implements `HasBounds`:
/// ```ignore
/// impl_has_bounds_delegate!(Glyph, rect);
/// // expands to: HasBounds::left(&self.rect)
/// ```
macro_rules! impl_has_bounds_delegate {
    ($type:ty, $field:ident) => {
        impl crate::utils::HasBounds for $type {
            fn left(&self) -> f64 {
                crate::utils::HasBounds::left(&self.$field)
            }
            fn top(&self) -> f64 {
                crate::utils::HasBounds::top(&self.$field)
            }
            fn right(&self) -> f64 {
                crate::utils::HasBounds::right(&self.$field)
            }
            fn bottom(&self) -> f64 {
                crate::utils::HasBounds::bottom(&self.$field)
            }
        }
    };
}

// Note: This appears unused but is needed for macro invocations in sibling modules
#[allow(unused_imports)]
pub(crate) use impl_has_bounds_delegate;

mod font;
mod glyph;
mod rectangle;
mod ruling;
mod textrun;

pub use font::{FontHandle, FontRegistry};
pub use glyph::{Glyph, GlyphBuilder};
pub use rectangle::Rectangle;
pub use ruling::Ruling;
pub use textrun::TextRun;
