//! High-level API for merging many pages at once.
//!
//! Pages are independent: each carries its own glyphs and rulings, so they
//! are merged in parallel on the rayon pool with no shared state.

use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::layout::{Glyph, MergeParams, Ruling, TextRun, WordMerger};

/// Glyph stream and vertical rulings of one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageGlyphs {
    pub glyphs: Vec<Glyph>,
    pub rulings: Vec<Ruling>,
}

impl PageGlyphs {
    pub fn new(glyphs: Vec<Glyph>, rulings: Vec<Ruling>) -> Self {
        Self { glyphs, rulings }
    }
}

/// Merges every page, returning runs per page in page order.
///
/// Fails only if `params` are invalid.
///
/// # Example
/// ```ignore
/// use wordmerge_core::high_level::{PageGlyphs, merge_pages};
///
/// let pages = vec![PageGlyphs::new(glyphs, rulings)];
/// let runs = merge_pages(&pages, None)?;
/// ```
pub fn merge_pages(
    pages: &[PageGlyphs],
    params: Option<MergeParams>,
) -> Result<Vec<Vec<TextRun>>> {
    let merger = WordMerger::new(params.unwrap_or_default())?;
    debug!(pages = pages.len(), "merging pages");
    Ok(pages
        .par_iter()
        .map(|page| merger.merge(&page.glyphs, &page.rulings))
        .collect())
}
