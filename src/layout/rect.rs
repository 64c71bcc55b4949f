//! Rect: The on-screen area covered by a rendered node.

/// A rectangle defined by position and size, in terminal cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Build the visible part of a rectangle given in signed coordinates.
    ///
    /// Anything left of column 0, above row 0, or beyond `u16::MAX` is cut
    /// away. Returns `None` when nothing remains.
    pub fn from_signed(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        let max = i64::from(u16::MAX);
        let clip = |start: i32, len: i32| -> Option<(u16, u16)> {
            let start = i64::from(start);
            let end = (start + i64::from(len)).min(max);
            let start = start.max(0);
            if end <= start {
                return None;
            }
            Some((u16::try_from(start).ok()?, u16::try_from(end - start).ok()?))
        };
        let (x, width) = clip(x, width)?;
        let (y, height) = clip(y, height)?;
        Some(Self::new(x, y, width, height))
    }

    /// Get the area (number of cells).
    #[inline]
    pub const fn area(&self) -> u32 {
        (self.width as u32) * (self.height as u32)
    }

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The overlap of two rectangles, or [`Rect::ZERO`] if they are disjoint.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= x || bottom <= y {
            return Self::ZERO;
        }
        Self::new(x, y, right - x, bottom - y)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(2, 3, 4, 1);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 3));
        assert!(!r.contains(6, 3));
        assert!(!r.contains(2, 4));
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 8, 10, 10);
        assert_eq!(a.intersection(&b), Rect::new(5, 8, 5, 2));
        assert_eq!(a.intersection(&Rect::new(20, 20, 1, 1)), Rect::ZERO);
    }

    #[test]
    fn test_from_signed_clips_top() {
        assert_eq!(Rect::from_signed(4, -2, 10, 5), Some(Rect::new(4, 0, 10, 3)));
    }

    #[test]
    fn test_from_signed_rejects_degenerate() {
        assert_eq!(Rect::from_signed(0, 0, 0, 5), None);
        assert_eq!(Rect::from_signed(0, 0, -1, 5), None);
        assert_eq!(Rect::from_signed(0, -5, 4, 5), None);
    }
}
