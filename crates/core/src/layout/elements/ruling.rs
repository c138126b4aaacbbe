//! Vertical ruling used as a merge obstacle.

use crate::error::{LayoutError, Result};
use crate::utils::HasBounds;

/// A vertical line segment at x = `position` spanning [top, bottom].
///
/// Rulings come from the ruling-detection stage and usually mark table
/// column separators; glyphs on either side are never merged across one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ruling {
    position: f64,
    top: f64,
    bottom: f64,
}

impl Ruling {
    /// Creates a vertical ruling.
    ///
    /// An inverted extent (top > bottom) or a non-finite coordinate is a
    /// contract violation by the caller and is rejected.
    pub fn vertical(position: f64, top: f64, bottom: f64) -> Result<Self> {
        if !(position.is_finite() && top.is_finite() && bottom.is_finite()) {
            return Err(LayoutError::NonFiniteRuling {
                position,
                top,
                bottom,
            });
        }
        if top > bottom {
            return Err(LayoutError::InvertedRuling {
                position,
                top,
                bottom,
            });
        }
        Ok(Self {
            position,
            top,
            bottom,
        })
    }

    pub const fn position(&self) -> f64 {
        self.position
    }

    /// True if the ruling's extent and the box's [top, bottom] share a
    /// non-empty interval.
    pub fn vertically_overlaps_box<B: HasBounds + ?Sized>(&self, other: &B) -> bool {
        self.vertical_overlap(other) > 0.0
    }

    /// True if `y` lies strictly inside the ruling's extent.
    pub fn brackets_y(&self, y: f64) -> bool {
        y > self.top && y < self.bottom
    }

    /// True if the ruling stands between `a` and `b`: both overlap its extent
    /// vertically and its position lies strictly between their left edges.
    pub fn separates<A, B>(&self, a: &A, b: &B) -> bool
    where
        A: HasBounds + ?Sized,
        B: HasBounds + ?Sized,
    {
        if !(self.vertically_overlaps_box(a) && self.vertically_overlaps_box(b)) {
            return false;
        }
        let x = self.position;
        (a.left() < x && b.left() > x) || (a.left() > x && b.left() < x)
    }
}

impl HasBounds for Ruling {
    fn left(&self) -> f64 {
        self.position
    }
    fn top(&self) -> f64 {
        self.top
    }
    fn right(&self) -> f64 {
        self.position
    }
    fn bottom(&self) -> f64 {
        self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::elements::Rectangle;

    #[test]
    fn rejects_inverted_extent() {
        assert_eq!(
            Ruling::vertical(5.0, 10.0, 0.0),
            Err(LayoutError::InvertedRuling {
                position: 5.0,
                top: 10.0,
                bottom: 0.0
            })
        );
    }

    #[test]
    fn rejects_non_finite() {
        assert!(matches!(
            Ruling::vertical(f64::NAN, 0.0, 10.0),
            Err(LayoutError::NonFiniteRuling { .. })
        ));
        assert!(Ruling::vertical(1.0, 0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn zero_length_ruling_is_allowed() {
        let r = Ruling::vertical(1.0, 5.0, 5.0).unwrap();
        assert_eq!(r.height(), 0.0);
    }

    #[test]
    fn separates_boxes_on_either_side() {
        let r = Ruling::vertical(20.0, 0.0, 100.0).unwrap();
        let left = Rectangle::new(0.0, 10.0, 10.0, 10.0);
        let right = Rectangle::new(30.0, 10.0, 10.0, 10.0);
        assert!(r.separates(&left, &right));
        assert!(r.separates(&right, &left));
    }

    #[test]
    fn does_not_separate_boxes_outside_extent() {
        let r = Ruling::vertical(20.0, 0.0, 5.0).unwrap();
        let left = Rectangle::new(0.0, 10.0, 10.0, 10.0);
        let right = Rectangle::new(30.0, 10.0, 10.0, 10.0);
        assert!(!r.separates(&left, &right));
    }

    #[test]
    fn touching_extent_is_not_overlap() {
        let r = Ruling::vertical(20.0, 0.0, 10.0).unwrap();
        let below = Rectangle::new(0.0, 10.0, 10.0, 10.0);
        assert!(!r.vertically_overlaps_box(&below));
    }

    #[test]
    fn brackets_is_strict() {
        let r = Ruling::vertical(20.0, 0.0, 10.0).unwrap();
        assert!(r.brackets_y(5.0));
        assert!(!r.brackets_y(10.0));
        assert!(!r.brackets_y(0.0));
    }
}
