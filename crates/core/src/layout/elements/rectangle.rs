//! Axis-aligned rectangle in document space.

use std::hash::Hash;

use crate::error::{LayoutError, Result};
use crate::utils::HasBounds;

/// Axis-aligned box with its origin at the top-left corner.
///
/// y grows downward, so `top == y` and `bottom == y + height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub(crate) x: f64,
    pub(crate) y: f64,
    pub(crate) width: f64,
    pub(crate) height: f64,
}

impl Rectangle {
    /// Creates a rectangle from its top-left corner and size.
    ///
    /// Negative sizes are clamped to zero; use [`Rectangle::try_new`] to
    /// reject them instead.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Creates a rectangle, rejecting negative or non-finite values.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        let finite = [x, y, width, height].iter().all(|v| v.is_finite());
        if !finite || width < 0.0 || height < 0.0 {
            return Err(LayoutError::InvalidRectangle { width, height });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Creates the rectangle spanning two corners given as edges in any order.
    pub fn from_edges(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        let (x0, x1) = (left.min(right), left.max(right));
        let (y0, y1) = (top.min(bottom), top.max(bottom));
        Self {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }

    pub const fn x(&self) -> f64 {
        self.x
    }

    pub const fn y(&self) -> f64 {
        self.y
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Smallest rectangle containing both boxes.
    pub fn union<B: HasBounds + ?Sized>(&self, other: &B) -> Self {
        Self::from_edges(
            self.left().min(other.left()),
            self.top().min(other.top()),
            self.right().max(other.right()),
            self.bottom().max(other.bottom()),
        )
    }

    pub(crate) fn hash_bits<H: std::hash::Hasher>(&self, state: &mut H) {
        self.x.to_bits().hash(state);
        self.y.to_bits().hash(state);
        self.width.to_bits().hash(state);
        self.height.to_bits().hash(state);
    }

    pub(crate) fn bits_eq(&self, other: &Rectangle) -> bool {
        self.x.to_bits() == other.x.to_bits()
            && self.y.to_bits() == other.y.to_bits()
            && self.width.to_bits() == other.width.to_bits()
            && self.height.to_bits() == other.height.to_bits()
    }
}

impl HasBounds for Rectangle {
    fn left(&self) -> f64 {
        self.x
    }
    fn top(&self) -> f64 {
        self.y
    }
    fn right(&self) -> f64 {
        self.x + self.width
    }
    fn bottom(&self) -> f64 {
        self.y + self.height
    }
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
}
