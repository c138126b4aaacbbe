//! Geometry and tolerance helpers shared by the layout types.
//!
//! Provides:
//! - The `HasBounds` trait for anything with an axis-aligned box
//! - Float comparison helpers used by the merge heuristics

/// Default tolerance for float equality between glyph coordinates.
pub const EPSILON: f64 = 0.01;

/// Default variance for the same-line overlap test.
pub const LINE_VARIANCE: f64 = 0.1;

/// Compares two floats for approximate equality.
#[inline]
pub fn feq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() < epsilon
}

/// Returns true if `second` lies strictly within `variance` of `first`.
#[inline]
pub fn within(first: f64, second: f64, variance: f64) -> bool {
    second < first + variance && second > first - variance
}

/// Same-line predicate on two vertical spans given by their bottom edge and height.
///
/// The spans overlap when their bottoms are within `variance`, or when either
/// bottom falls inside the other span.
pub fn overlap(bottom1: f64, height1: f64, bottom2: f64, height2: f64, variance: f64) -> bool {
    within(bottom1, bottom2, variance)
        || (bottom2 <= bottom1 && bottom2 >= bottom1 - height1)
        || (bottom1 <= bottom2 && bottom1 >= bottom2 - height2)
}

/// Trait for objects that have a bounding box.
///
/// Coordinates follow document space with y growing downward, so `top <= bottom`.
pub trait HasBounds {
    fn left(&self) -> f64;
    fn top(&self) -> f64;
    fn right(&self) -> f64;
    fn bottom(&self) -> f64;

    fn width(&self) -> f64 {
        self.right() - self.left()
    }

    fn height(&self) -> f64 {
        self.bottom() - self.top()
    }

    fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Length of the shared [top, bottom] interval with another box, 0 if disjoint.
    fn vertical_overlap<B: HasBounds + ?Sized>(&self, other: &B) -> f64 {
        (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0)
    }

    /// Length of the shared [left, right] interval with another box, 0 if disjoint.
    fn horizontal_overlap<B: HasBounds + ?Sized>(&self, other: &B) -> f64 {
        (self.right().min(other.right()) - self.left().max(other.left())).max(0.0)
    }

    /// Fraction of this box's area covered by the intersection with `other`.
    ///
    /// Degenerate (zero-area) boxes report 0.
    fn overlap_ratio<B: HasBounds + ?Sized>(&self, other: &B) -> f64 {
        let area = self.area();
        if area <= 0.0 {
            return 0.0;
        }
        self.horizontal_overlap(other) * self.vertical_overlap(other) / area
    }

    /// Same-line test: does `other` vertically overlap this box within `variance`?
    fn vertically_overlaps<B: HasBounds + ?Sized>(&self, other: &B, variance: f64) -> bool {
        overlap(
            self.bottom(),
            self.height(),
            other.bottom(),
            other.height(),
            variance,
        )
    }
}
