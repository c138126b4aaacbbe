//! Running accumulators threaded through the merge pass.

use crate::layout::elements::Glyph;
use crate::layout::params::MergeParams;
use crate::utils::{HasBounds, overlap};

/// Per-pass state for the single left-to-right merge.
///
/// `None` stands for "unknown": no prior position, no spacing observation,
/// no usable average character width.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct MergeState {
    /// Blended average character width, biased toward recent glyphs
    pub(crate) average_char_width: Option<f64>,
    /// Right edge of the last glyph placed on the current line
    pub(crate) end_of_last_text_x: Option<f64>,
    /// Width-of-space seen on the previous glyph
    pub(crate) last_word_spacing: Option<f64>,
    pub(crate) line: LineEnvelope,
}

/// Vertical envelope of the line being accumulated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct LineEnvelope {
    pub(crate) max_bottom: f64,
    pub(crate) max_height: f64,
    pub(crate) min_top: f64,
}

impl LineEnvelope {
    /// Envelope of a line with nothing on it yet.
    pub(crate) const fn empty() -> Self {
        Self {
            max_bottom: -f64::MAX,
            max_height: -1.0,
            min_top: f64::MAX,
        }
    }

    pub(crate) fn of<B: HasBounds + ?Sized>(b: &B) -> Self {
        Self {
            max_bottom: b.bottom(),
            max_height: b.height(),
            min_top: b.top(),
        }
    }

    pub(crate) fn extend<B: HasBounds + ?Sized>(&mut self, b: &B) {
        self.max_bottom = self.max_bottom.max(b.bottom());
        self.max_height = self.max_height.max(b.height());
        self.min_top = self.min_top.min(b.top());
    }

    /// Same-line test of a glyph box against this envelope.
    pub(crate) fn admits<B: HasBounds + ?Sized>(&self, b: &B, variance: f64) -> bool {
        overlap(
            b.bottom(),
            b.height(),
            self.max_bottom,
            self.max_height,
            variance,
        )
    }
}

impl MergeState {
    /// State after seeding the first run with `first`.
    pub(crate) fn seeded(first: &Glyph) -> Self {
        let width = first.width();
        Self {
            average_char_width: width.is_finite().then_some(width),
            end_of_last_text_x: Some(first.right()),
            last_word_spacing: None,
            line: LineEnvelope::of(first),
        }
    }

    /// Forgets everything about the current line.
    pub(crate) fn start_line(&mut self) {
        self.end_of_last_text_x = None;
        self.line = LineEnvelope::empty();
    }

    /// Expected word gap from the font's space width; infinite when unknown.
    pub(crate) fn space_gap(&self, glyph: &Glyph, params: &MergeParams) -> f64 {
        if !glyph.has_known_space_width() {
            return f64::INFINITY;
        }
        let spacing = glyph.width_of_space();
        match self.last_word_spacing {
            None => spacing * params.space_tolerance,
            Some(last) => (spacing + last) / 2.0 * params.space_tolerance,
        }
    }

    /// Two-term blend of the running average with this glyph's char width.
    ///
    /// This is a pairwise average, not a cumulative mean: recent glyphs
    /// weigh more.
    pub(crate) fn blended_char_width(&self, glyph: &Glyph) -> Option<f64> {
        match (self.average_char_width, glyph.char_width()) {
            (Some(prev), Some(cur)) => Some((prev + cur) / 2.0),
            (None, Some(cur)) => Some(cur),
            (prev, None) => prev,
        }
    }

    /// Records the observations of a placed glyph for the next iteration.
    pub(crate) fn observe(
        &mut self,
        glyph: &Glyph,
        average: Option<f64>,
        inserted_space: Option<&Glyph>,
    ) {
        self.last_word_spacing = glyph
            .has_known_space_width()
            .then(|| glyph.width_of_space());
        self.average_char_width = match (average, inserted_space) {
            (Some(avg), Some(sp)) => Some((avg + sp.width()) / 2.0),
            (None, Some(sp)) => Some(sp.width()),
            (avg, None) => avg,
        };
    }
}
