//! TextRun: an ordered group of glyphs forming a word or line fragment.

use itertools::Itertools;
use once_cell::sync::OnceCell;

use crate::layout::bidi::Direction;

use super::glyph::Glyph;
use super::rectangle::Rectangle;

/// Ordered, non-empty sequence of glyphs with their aggregate bounding box.
///
/// The box is kept equal to the union of member boxes on every push. The
/// dominant direction is computed on first use and cached.
#[derive(Debug, Clone)]
pub struct TextRun {
    bounds: Rectangle,
    glyphs: Vec<Glyph>,
    direction: OnceCell<Direction>,
}

impl TextRun {
    /// Creates a run seeded with one glyph.
    pub fn new(seed: Glyph) -> Self {
        Self {
            bounds: *seed.rect(),
            glyphs: vec![seed],
            direction: OnceCell::new(),
        }
    }

    /// Builds a run from glyphs in order, `None` if there are none.
    pub fn from_glyphs(glyphs: impl IntoIterator<Item = Glyph>) -> Option<Self> {
        let mut iter = glyphs.into_iter();
        let mut run = Self::new(iter.next()?);
        for glyph in iter {
            run.push(glyph);
        }
        Some(run)
    }

    fn with_direction(glyphs: Vec<Glyph>, direction: Direction) -> Option<Self> {
        let run = Self::from_glyphs(glyphs)?;
        // Freshly built, so the cell is empty.
        let _ = run.direction.set(direction);
        Some(run)
    }

    /// Appends a glyph, growing the aggregate box.
    pub fn push(&mut self, glyph: Glyph) {
        self.bounds = self.bounds.union(&glyph);
        self.glyphs.push(glyph);
        self.direction = OnceCell::new();
    }

    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    pub fn into_glyphs(self) -> Vec<Glyph> {
        self.glyphs
    }

    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// The last glyph; a run is never empty.
    pub fn last(&self) -> &Glyph {
        &self.glyphs[self.glyphs.len() - 1]
    }

    pub const fn bounds(&self) -> &Rectangle {
        &self.bounds
    }

    /// Concatenated glyph text in run order.
    pub fn text(&self) -> String {
        let len = self.glyphs.iter().map(|g| g.text().len()).sum();
        let mut out = String::with_capacity(len);
        for g in &self.glyphs {
            out.push_str(g.text());
        }
        out
    }

    /// True if every glyph is whitespace (or empty).
    pub fn is_blank(&self) -> bool {
        self.glyphs
            .iter()
            .all(|g| g.text().chars().all(char::is_whitespace))
    }

    /// Majority writing direction by character count; ties and all-neutral
    /// runs are left-to-right.
    pub fn dominant_direction(&self) -> Direction {
        *self.direction.get_or_init(|| {
            let (mut ltr, mut rtl) = (0usize, 0usize);
            for g in &self.glyphs {
                let chars = g.text().chars().count();
                match g.bidi_direction() {
                    Some(Direction::Ltr) => ltr += chars,
                    Some(Direction::Rtl) => rtl += chars,
                    None => {}
                }
            }
            if rtl > ltr {
                Direction::Rtl
            } else {
                Direction::Ltr
            }
        })
    }

    /// Splits into maximal consecutive groups that are either all
    /// `dominant`-or-neutral or all of the opposite direction.
    ///
    /// Glyph order is preserved and no glyph is dropped. Each returned run
    /// reports its group's direction as its dominant direction.
    pub fn split_by_direction(&self, dominant: Direction) -> Vec<TextRun> {
        let minority = dominant.opposite();
        let groups = self
            .glyphs
            .iter()
            .chunk_by(|g| g.bidi_direction() == Some(minority));

        let mut runs = Vec::new();
        for (is_minority, group) in &groups {
            let direction = if is_minority { minority } else { dominant };
            if let Some(run) = Self::with_direction(group.cloned().collect(), direction) {
                runs.push(run);
            }
        }
        runs
    }

    /// Splits before glyph `index`; `None` unless both halves are non-empty.
    pub fn split_at(&self, index: usize) -> Option<(TextRun, TextRun)> {
        if index == 0 || index >= self.glyphs.len() {
            return None;
        }
        let (head, tail) = self.glyphs.split_at(index);
        Some((
            Self::from_glyphs(head.iter().cloned())?,
            Self::from_glyphs(tail.iter().cloned())?,
        ))
    }
}

impl_has_bounds_delegate!(TextRun, bounds);

impl PartialEq for TextRun {
    fn eq(&self, other: &Self) -> bool {
        self.glyphs == other.glyphs
    }
}
