//! Word merging: grouping a positioned glyph stream into text runs.
//!
//! A single forward pass accumulates glyphs into a current run, inferring
//! word gaps from the font's space width and a running average character
//! width, and starting a new run on line changes or ruling crossings. Each
//! run is then split so that no run mixes writing directions.
//!
//! The pass is sensitive to input order: glyphs are expected in roughly
//! reading order, as produced by the extraction stage.

mod state;
mod wrap;

use tracing::{debug, trace};

use crate::error::Result;
use crate::layout::elements::{Glyph, Ruling, TextRun};
use crate::layout::params::MergeParams;
use crate::utils::{HasBounds, feq};

use state::MergeState;
use wrap::{closest_ruling_distance, width_of_word};

/// Merges glyphs into text runs with default parameters.
///
/// The caller's slice is never modified. Empty input yields no runs.
pub fn merge_words(glyphs: &[Glyph], rulings: &[Ruling]) -> Vec<TextRun> {
    WordMerger::default().merge(glyphs, rulings)
}

/// Glyph-to-run merger holding its tuning parameters.
#[derive(Debug, Clone, Default)]
pub struct WordMerger {
    params: MergeParams,
}

impl WordMerger {
    /// Creates a merger, rejecting parameters that fail [`MergeParams::validate`].
    pub fn new(params: MergeParams) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub const fn params(&self) -> &MergeParams {
        &self.params
    }

    /// Merges `glyphs` into direction-homogeneous runs.
    ///
    /// Every input glyph appears in exactly one output run unless it was
    /// dropped as a duplicate or a redundant space; synthetic spaces may be
    /// inserted between words. Glyphs separated by a ruling never share a run.
    pub fn merge(&self, glyphs: &[Glyph], rulings: &[Ruling]) -> Vec<TextRun> {
        let runs = self.group(glyphs, rulings);
        let total = runs.len();

        let mut out = Vec::with_capacity(total);
        for run in runs {
            let dominant = run.dominant_direction();
            let parts = run.split_by_direction(dominant);
            if parts.len() > 1 {
                debug!(
                    ?dominant,
                    parts = parts.len(),
                    text = %run.text(),
                    "split mixed-direction run"
                );
            }
            out.extend(parts);
        }

        debug!(
            glyphs = glyphs.len(),
            rulings = rulings.len(),
            runs = out.len(),
            "merged words"
        );
        out
    }

    /// The forward pass, before direction splitting.
    fn group(&self, glyphs: &[Glyph], rulings: &[Ruling]) -> Vec<TextRun> {
        let params = &self.params;
        let Some(first) = glyphs.first() else {
            return Vec::new();
        };

        let mut runs = vec![TextRun::new(first.clone())];
        let mut state = MergeState::seeded(first);
        // Index of the last real glyph placed in a run.
        let mut prev_idx = 0;

        for (idx, glyph) in glyphs.iter().enumerate().skip(1) {
            let prev = &glyphs[prev_idx];

            if glyph.text() == prev.text() && prev.overlap_ratio(glyph) > params.duplicate_overlap
            {
                trace!(index = idx, text = %glyph.text(), "dropping overlapping duplicate");
                continue;
            }

            if glyph.text() == " "
                && feq(prev.left(), glyph.left(), params.epsilon)
                && feq(prev.top(), glyph.top(), params.epsilon)
            {
                trace!(index = idx, "dropping space stacked on previous glyph");
                continue;
            }

            if glyph.font() != prev.font() || !feq(glyph.font_size(), prev.font_size(), params.epsilon)
            {
                state.average_char_width = None;
            }

            let crosses_ruling = rulings.iter().any(|r| r.separates(prev, glyph));

            let space_gap = state.space_gap(glyph, params);
            let average = state.blended_char_width(glyph);
            let char_gap = average.map_or(f64::INFINITY, |w| w * params.average_char_tolerance);
            let mut expected_next_x = state
                .end_of_last_text_x
                .map(|end| end + char_gap.min(space_gap));

            let mut same_line = true;
            if !state.line.admits(glyph, params.line_variance) {
                let word_width = width_of_word(glyphs, idx);
                let ruling_distance = closest_ruling_distance(glyphs, prev_idx, rulings);
                if word_width < ruling_distance {
                    debug!(
                        index = idx,
                        line_top = state.line.min_top,
                        line_bottom = state.line.max_bottom,
                        "starting new line"
                    );
                    state.start_line();
                    expected_next_x = None;
                    same_line = false;
                } else {
                    trace!(
                        index = idx,
                        word_width,
                        ruling_distance,
                        "treating vertical jump as wrapped word"
                    );
                }
            }

            state.end_of_last_text_x = Some(glyph.right());

            let space = match expected_next_x {
                Some(x)
                    if !crosses_ruling
                        && same_line
                        && x < glyph.left()
                        && !prev.text().ends_with(' ') =>
                {
                    Some(Glyph::inferred_space(prev, x))
                }
                _ => None,
            };

            state.line.extend(glyph);

            if crosses_ruling {
                trace!(index = idx, "ruling between glyphs, breaking run");
            }
            if same_line && !crosses_ruling {
                // runs is seeded above and only grows
                if let Some(current) = runs.last_mut() {
                    if let Some(sp) = &space {
                        current.push(sp.clone());
                    }
                    current.push(glyph.clone());
                }
            } else {
                runs.push(TextRun::new(glyph.clone()));
            }
            prev_idx = idx;

            state.observe(glyph, average, space.as_ref());
        }

        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LayoutError;
    use crate::layout::elements::{FontHandle, Rectangle};

    fn glyph(font: &FontHandle, x: f64, y: f64, width: f64, text: &str) -> Glyph {
        Glyph::new(
            Rectangle::new(x, y, width, 10.0),
            text,
            font.clone(),
            10.0,
            6.0,
        )
    }

    fn texts(runs: &[TextRun]) -> Vec<String> {
        runs.iter().map(TextRun::text).collect()
    }

    #[test]
    fn empty_input_gives_no_runs() {
        assert!(merge_words(&[], &[]).is_empty());
    }

    #[test]
    fn single_glyph_is_one_run() {
        let f = FontHandle::new("F");
        let runs = merge_words(&[glyph(&f, 0.0, 0.0, 10.0, "x")], &[]);
        assert_eq!(texts(&runs), vec!["x"]);
    }

    #[test]
    fn adjacent_glyphs_join_without_space() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "H"), glyph(&f, 10.0, 0.0, 8.0, "i")];
        assert_eq!(texts(&merge_words(&glyphs, &[])), vec!["Hi"]);
    }

    #[test]
    fn gap_inserts_space_from_prev_left_to_expected_x() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "H"), glyph(&f, 30.0, 0.0, 8.0, "i")];
        let runs = merge_words(&glyphs, &[]);
        assert_eq!(texts(&runs), vec!["H i"]);
        let space = &runs[0].glyphs()[1];
        assert!(space.is_synthetic());
        assert_eq!(space.left(), 0.0);
        // avg char width (10 + 8) / 2 = 9, * 0.3 = 2.7 < 6 * 0.5
        assert!((space.right() - 12.7).abs() < 1e-9);
    }

    #[test]
    fn no_space_after_glyph_ending_in_space() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "a "), glyph(&f, 40.0, 0.0, 8.0, "b")];
        assert_eq!(texts(&merge_words(&glyphs, &[])), vec!["a b"]);
    }

    #[test]
    fn overlapping_duplicate_is_dropped() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "b"), glyph(&f, 1.0, 0.0, 10.0, "b")];
        assert_eq!(texts(&merge_words(&glyphs, &[])), vec!["b"]);
    }

    #[test]
    fn stacked_space_is_dropped() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "a"), glyph(&f, 0.005, 0.0, 3.0, " ")];
        assert_eq!(texts(&merge_words(&glyphs, &[])), vec!["a"]);
    }

    #[test]
    fn lower_glyph_starts_new_run() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "a"), glyph(&f, 0.0, 30.0, 10.0, "b")];
        assert_eq!(texts(&merge_words(&glyphs, &[])), vec!["a", "b"]);
    }

    #[test]
    fn ruling_breaks_run_without_space() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "a"), glyph(&f, 30.0, 0.0, 10.0, "b")];
        let rulings = vec![Ruling::vertical(20.0, -5.0, 50.0).unwrap()];
        let runs = merge_words(&glyphs, &rulings);
        assert_eq!(texts(&runs), vec!["a", "b"]);
        assert!(runs.iter().flat_map(TextRun::glyphs).all(|g| !g.is_synthetic()));
    }

    #[test]
    fn word_wider_than_cell_wraps_into_same_run() {
        let f = FontHandle::new("F");
        // "ab" on one row, "cd" below; a ruling hugs the right of "b".
        let glyphs = vec![
            glyph(&f, 0.0, 0.0, 5.0, "a"),
            glyph(&f, 5.0, 0.0, 5.0, "b"),
            glyph(&f, 0.0, 12.0, 5.0, "c"),
            glyph(&f, 5.0, 12.0, 5.0, "d"),
        ];
        let rulings = vec![Ruling::vertical(11.0, -5.0, 30.0).unwrap()];
        assert_eq!(texts(&merge_words(&glyphs, &rulings)), vec!["abcd"]);
    }

    #[test]
    fn new_rejects_invalid_struct_literal() {
        let params = MergeParams {
            duplicate_overlap: -1.0,
            ..MergeParams::default()
        };
        assert_eq!(
            WordMerger::new(params).unwrap_err(),
            LayoutError::InvalidParameter {
                name: "duplicate_overlap",
                value: -1.0
            }
        );
    }

    #[test]
    fn repeated_letters_side_by_side_are_not_duplicates() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 6.0, "a"), glyph(&f, 6.0, 0.0, 6.0, "a")];
        let merger = WordMerger::new(MergeParams::default()).unwrap();
        assert_eq!(texts(&merger.merge(&glyphs, &[])), vec!["aa"]);
    }

    #[test]
    fn input_slice_is_untouched() {
        let f = FontHandle::new("F");
        let glyphs = vec![glyph(&f, 0.0, 0.0, 10.0, "a"), glyph(&f, 0.0, 30.0, 10.0, "b")];
        let before = glyphs.clone();
        let _ = merge_words(&glyphs, &[]);
        assert_eq!(glyphs, before);
    }
}
