//! Writing-direction classification for glyph text.
//!
//! Uses the UAX#9 bidi class of each character to decide whether a glyph
//! flows left-to-right or right-to-left.

use unicode_bidi::{BidiClass, bidi_class};

/// A strong writing direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right (Latin, CJK, ...)
    Ltr,
    /// Right-to-left (Hebrew, Arabic, ...)
    Rtl,
}

impl Direction {
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Ltr => Direction::Rtl,
            Direction::Rtl => Direction::Ltr,
        }
    }

    /// Maps a signed direction flag: negative is right-to-left, positive is
    /// left-to-right, zero (or NaN) carries no direction.
    pub fn from_flag(flag: f64) -> Option<Self> {
        if flag < 0.0 {
            Some(Direction::Rtl)
        } else if flag > 0.0 {
            Some(Direction::Ltr)
        } else {
            None
        }
    }
}

/// Strong direction of a single character, `None` for weak and neutral classes.
pub fn char_direction(c: char) -> Option<Direction> {
    match bidi_class(c) {
        BidiClass::L | BidiClass::LRE | BidiClass::LRO => Some(Direction::Ltr),
        BidiClass::R | BidiClass::AL | BidiClass::RLE | BidiClass::RLO => Some(Direction::Rtl),
        _ => None,
    }
}

/// Direction of the first strongly-directional character in `text`.
pub fn text_direction(text: &str) -> Option<Direction> {
    text.chars().find_map(char_direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_is_ltr() {
        assert_eq!(text_direction("abc"), Some(Direction::Ltr));
    }

    #[test]
    fn hebrew_and_arabic_are_rtl() {
        assert_eq!(text_direction("\u{05D0}"), Some(Direction::Rtl));
        assert_eq!(text_direction("\u{0627}"), Some(Direction::Rtl));
    }

    #[test]
    fn digits_and_spaces_are_neutral() {
        assert_eq!(text_direction(" "), None);
        assert_eq!(text_direction("42"), None);
        assert_eq!(text_direction(""), None);
    }

    #[test]
    fn first_strong_character_wins() {
        assert_eq!(text_direction("1\u{05D0}a"), Some(Direction::Rtl));
    }

    #[test]
    fn flag_sign_maps_to_direction() {
        assert_eq!(Direction::from_flag(-1.0), Some(Direction::Rtl));
        assert_eq!(Direction::from_flag(1.0), Some(Direction::Ltr));
        assert_eq!(Direction::from_flag(0.0), None);
        assert_eq!(Direction::from_flag(f64::NAN), None);
    }
}
