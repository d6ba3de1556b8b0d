//! Bounds: local boundary specs with far-edge-relative semantics.

use super::rect::Rect;

/// A boundary specification in a parent's local coordinate space.
///
/// Each edge is a signed offset. Non-negative start edges (`x1`, `y1`)
/// count from the parent's near edge; negative start edges count back
/// from the far edge, exclusive. Negative end edges (`x2`, `y2`) count
/// back from the far edge *inclusive* (a `+1` is applied during
/// resolution), so `-1` means "through the last row/column" while `0`
/// still means "at the first row/column" for start edges.
///
/// # Example
///
/// ```
/// use mullion::{Bounds, Rect};
///
/// let parent = Rect::new(0, 0, 20, 5);
/// // one-cell margin on every side
/// let inner = Bounds::new(1, 1, -2, -2).resolve(parent);
/// assert_eq!(inner.width(), 18);
/// assert_eq!(inner.height(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Bounds {
    /// Left edge spec.
    pub x1: i32,
    /// Top edge spec.
    pub y1: i32,
    /// Right edge spec.
    pub x2: i32,
    /// Bottom edge spec.
    pub y2: i32,
}

impl Bounds {
    /// Create a new boundary spec.
    #[inline]
    pub const fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Boundary spec covering the entire parent.
    pub const FULL: Self = Self::new(0, 0, -1, -1);

    /// Resolve this spec against a parent's absolute rectangle.
    ///
    /// Pure and total: any combination of signed inputs yields a rect.
    /// Callers are expected to re-resolve on every coordinate query, so
    /// a resized parent is reflected without explicit propagation.
    #[inline]
    pub const fn resolve(&self, parent: Rect) -> Rect {
        let w = parent.width();
        let h = parent.height();
        Rect {
            x1: parent.x1 + if self.x1 < 0 { w + self.x1 } else { self.x1 },
            y1: parent.y1 + if self.y1 < 0 { h + self.y1 } else { self.y1 },
            x2: parent.x1 + if self.x2 < 0 { w + self.x2 + 1 } else { self.x2 },
            y2: parent.y1 + if self.y2 < 0 { h + self.y2 + 1 } else { self.y2 },
        }
    }
}
