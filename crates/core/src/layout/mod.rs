//! Layout reconstruction module.
//!
//! This module contains:
//! - Layout element types (Rectangle, Glyph, Ruling, TextRun)
//! - Word merging parameters (MergeParams)
//! - Writing-direction classification
//! - The word merging pass

pub mod bidi;
pub mod elements;
pub mod merge;
pub mod params;

pub use bidi::Direction;
pub use elements::*;
pub use merge::{WordMerger, merge_words};
pub use params::*;
