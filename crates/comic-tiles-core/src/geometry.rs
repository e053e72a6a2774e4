use serde::{Deserialize, Serialize};

/// Axis-aligned box in pixel coordinates, all four bounds inclusive.
///
/// `left <= right` and `top <= bottom` always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        debug_assert!(left <= right && top <= bottom);
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box spanning two opposite corners given in any order.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        Self {
            left: x0.min(x1),
            top: y0.min(y1),
            right: x0.max(x1),
            bottom: y0.max(y1),
        }
    }

    /// Single-pixel box.
    pub const fn point(x: u32, y: u32) -> Self {
        Self::new(x, y, x, y)
    }

    /// Grow the box so it contains `(x, y)`.
    #[inline]
    pub fn include(&mut self, x: u32, y: u32) {
        self.left = self.left.min(x);
        self.top = self.top.min(y);
        self.right = self.right.max(x);
        self.bottom = self.bottom.max(y);
    }

    #[inline]
    pub fn width(&self) -> u64 {
        u64::from(self.right - self.left) + 1
    }

    #[inline]
    pub fn height(&self) -> u64 {
        u64::from(self.bottom - self.top) + 1
    }

    /// Pixel count of the box, bounds inclusive.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() * self.height()
    }

    /// `area / total`, 0 for an empty total.
    pub fn area_fraction(&self, total: u64) -> f64 {
        if total == 0 {
            return 0.0;
        }
        self.area() as f64 / total as f64
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LTRB({},{},{},{})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
