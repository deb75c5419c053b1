//! Page-space geometry.

use serde::{Deserialize, Serialize};
use std::ops::{BitOr, BitOrAssign};

/// An axis-aligned rectangle in page coordinates (points).
///
/// `(x1, y1)` is the top-left corner and `(x2, y2)` the bottom-right corner
/// once normalized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    /// Create a bounding box from its corner coordinates.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Create a bounding box from an origin and a size.
    pub fn from_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, y, x + width, y + height)
    }

    /// A box is valid when it encloses a non-empty area.
    pub fn is_valid(&self) -> bool {
        self.x2 > self.x1 && self.y2 > self.y1
    }

    /// Return a copy with the corners swapped so that `x1 <= x2` and `y1 <= y2`.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.x1.min(self.x2),
            self.y1.min(self.y2),
            self.x1.max(self.x2),
            self.y1.max(self.y2),
        )
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Check whether a point lies inside the box (edges inclusive).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x1 && x <= self.x2 && y >= self.y1 && y <= self.y2
    }

    /// Center point as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.x1 + self.width() / 2.0, self.y1 + self.height() / 2.0)
    }

    /// Smallest box enclosing both boxes.
    ///
    /// An invalid (empty) left-hand side is ignored, so folding from
    /// `BoundingBox::default()` yields the union of the folded boxes.
    pub fn union(&self, other: &BoundingBox) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        if !a.is_valid() {
            return b;
        }
        Self::new(a.x1.min(b.x1), a.y1.min(b.y1), a.x2.max(b.x2), a.y2.max(b.y2))
    }
}

impl BitOr for BoundingBox {
    type Output = BoundingBox;

    fn bitor(self, rhs: BoundingBox) -> BoundingBox {
        self.union(&rhs)
    }
}

impl BitOrAssign for BoundingBox {
    fn bitor_assign(&mut self, rhs: BoundingBox) {
        *self = self.union(&rhs);
    }
}
