//! Word-wrap helpers deciding whether a vertical jump is a new line or a
//! word wrapped inside a ruled cell.

use crate::layout::elements::{Glyph, Ruling};
use crate::utils::HasBounds;

/// Width of the word starting at `glyphs[start]`.
///
/// The word ends at the right edge of the glyph before the first word break
/// (a glyph containing a space or newline) at or after `start`, or at the last
/// glyph when there is no break. A break at `start` itself measures the start
/// glyph alone.
pub(crate) fn width_of_word(glyphs: &[Glyph], start: usize) -> f64 {
    let Some(first) = glyphs.get(start) else {
        return 0.0;
    };
    let end = match glyphs[start..].iter().position(Glyph::is_word_break) {
        Some(0) => first.right(),
        Some(offset) => glyphs[start + offset - 1].right(),
        None => glyphs[glyphs.len() - 1].right(),
    };
    (first.left() - end).abs()
}

/// Distance from `glyphs[prev]` to the nearest ruling on its right.
///
/// Only considered when the following glyph sits lower than `prev`; rulings
/// must strictly bracket prev's bottom edge, and rulings nearer prev's left
/// edge than its right are skipped. Infinite when nothing qualifies.
pub(crate) fn closest_ruling_distance(glyphs: &[Glyph], prev: usize, rulings: &[Ruling]) -> f64 {
    let (Some(this), Some(next)) = (glyphs.get(prev), glyphs.get(prev + 1)) else {
        return f64::INFINITY;
    };
    if this.top() >= next.top() {
        return f64::INFINITY;
    }

    rulings
        .iter()
        .filter(|r| r.brackets_y(this.bottom()))
        .filter_map(|r| {
            let to_right = (this.right() - r.position()).abs();
            let to_left = (this.left() - r.position()).abs();
            (to_right <= to_left).then_some(to_right)
        })
        .fold(f64::INFINITY, f64::min)
}
