//! wordmerge - glyph-to-word-to-line reconstruction for positioned text.
//!
//! Takes the positioned glyph stream of a fixed-layout page, plus any known
//! vertical rulings, and groups glyphs into words and line-level text runs
//! using only geometric and typographic signals.

pub mod api;
pub mod error;
pub mod layout;
pub mod utils;

pub use api::high_level;

pub use error::{LayoutError, Result};
pub use layout::{
    Direction, FontHandle, FontRegistry, Glyph, GlyphBuilder, MergeParams, Rectangle, Ruling,
    TextRun, WordMerger, merge_words,
};
pub use utils::HasBounds;
