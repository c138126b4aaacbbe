//! Glyph: one positioned unit of text.
//!
//! Use `Glyph::builder()` to construct glyphs with optional fields.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::layout::bidi::{Direction, text_direction};
use crate::utils::HasBounds;

use super::font::FontHandle;
use super::rectangle::Rectangle;

/// Builder for Glyph with fluent API for optional fields.
///
/// # Example
/// ```ignore
/// let g = Glyph::builder(Rectangle::new(0.0, 0.0, 6.0, 12.0), "A", font, 12.0)
///     .width_of_space(3.0)
///     .direction(0.0)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct GlyphBuilder {
    rect: Rectangle,
    text: String,
    font: FontHandle,
    font_size: f64,
    width_of_space: f64,
    direction: f64,
}

impl GlyphBuilder {
    /// Creates a new builder with required fields.
    /// Optional fields default to: width_of_space=NaN (unknown), direction=0.0.
    pub fn new(rect: Rectangle, text: &str, font: FontHandle, font_size: f64) -> Self {
        Self {
            rect,
            text: text.to_string(),
            font,
            font_size,
            width_of_space: f64::NAN,
            direction: 0.0,
        }
    }

    /// Sets the width of a space in this glyph's font and size.
    pub const fn width_of_space(mut self, width_of_space: f64) -> Self {
        self.width_of_space = width_of_space;
        self
    }

    /// Sets the direction flag (negative right-to-left, 0 neutral).
    pub const fn direction(mut self, direction: f64) -> Self {
        self.direction = direction;
        self
    }

    pub fn build(self) -> Glyph {
        Glyph {
            rect: self.rect,
            text: self.text,
            font: self.font,
            font_size: self.font_size,
            width_of_space: self.width_of_space,
            direction: self.direction,
            synthetic: false,
        }
    }
}

/// One positioned text unit, usually a single character.
///
/// Equality is structural over geometry, text, font identity, font size,
/// width-of-space and direction. Floats compare by bit pattern so that
/// unknown (NaN) widths still compare equal to themselves.
#[derive(Debug, Clone)]
pub struct Glyph {
    rect: Rectangle,
    text: String,
    font: FontHandle,
    font_size: f64,
    width_of_space: f64,
    direction: f64,
    /// Inserted by the merger to represent an inferred word gap
    synthetic: bool,
}

impl Glyph {
    /// Creates a new builder for constructing Glyph instances.
    pub fn builder(rect: Rectangle, text: &str, font: FontHandle, font_size: f64) -> GlyphBuilder {
        GlyphBuilder::new(rect, text, font, font_size)
    }

    /// Creates a neutral-direction glyph.
    pub fn new(
        rect: Rectangle,
        text: &str,
        font: FontHandle,
        font_size: f64,
        width_of_space: f64,
    ) -> Self {
        Self::builder(rect, text, font, font_size)
            .width_of_space(width_of_space)
            .build()
    }

    /// Space glyph inferred after `prev`, spanning from its left edge to `end_x`.
    pub(crate) fn inferred_space(prev: &Glyph, end_x: f64) -> Self {
        Self {
            rect: Rectangle::new(prev.left(), prev.top(), end_x - prev.left(), prev.height()),
            text: " ".to_string(),
            font: prev.font.clone(),
            font_size: prev.font_size,
            width_of_space: prev.width_of_space,
            direction: 0.0,
            synthetic: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn rect(&self) -> &Rectangle {
        &self.rect
    }

    pub const fn font(&self) -> &FontHandle {
        &self.font
    }

    pub const fn font_size(&self) -> f64 {
        self.font_size
    }

    pub const fn width_of_space(&self) -> f64 {
        self.width_of_space
    }

    pub const fn direction(&self) -> f64 {
        self.direction
    }

    /// True for spaces inserted by the merger rather than extracted upstream.
    pub const fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// False when width-of-space is NaN, zero or otherwise unusable.
    pub fn has_known_space_width(&self) -> bool {
        self.width_of_space.is_finite() && self.width_of_space > 0.0
    }

    /// Width per character of text, `None` for empty text.
    pub fn char_width(&self) -> Option<f64> {
        match self.text.chars().count() {
            0 => None,
            n => Some(self.width() / n as f64),
        }
    }

    /// Writing direction: the first strong character of the text, else the
    /// sign of the direction flag, else `None` (neutral).
    pub fn bidi_direction(&self) -> Option<Direction> {
        text_direction(&self.text).or_else(|| Direction::from_flag(self.direction))
    }

    /// True if the text contains a space or line break.
    pub fn is_word_break(&self) -> bool {
        self.text.contains([' ', '\n'])
    }
}

impl_has_bounds_delegate!(Glyph, rect);

impl PartialEq for Glyph {
    fn eq(&self, other: &Self) -> bool {
        self.rect.bits_eq(&other.rect)
            && self.text == other.text
            && self.font == other.font
            && self.font_size.to_bits() == other.font_size.to_bits()
            && self.width_of_space.to_bits() == other.width_of_space.to_bits()
            && self.direction.to_bits() == other.direction.to_bits()
    }
}

impl Eq for Glyph {}

impl Hash for Glyph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rect.hash_bits(state);
        self.text.hash(state);
        self.font.hash(state);
        self.font_size.to_bits().hash(state);
        self.width_of_space.to_bits().hash(state);
        self.direction.to_bits().hash(state);
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Glyph[x={:.2},y={:.2},w={:.2},h={:.2},text=\"{}\"]",
            self.rect.x, self.rect.y, self.rect.width, self.rect.height, self.text
        )
    }
}
