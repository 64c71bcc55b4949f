//! Buffer: A grid of cells that rectangles are painted into.
//!
//! Cells are stored in row-major order in one contiguous allocation.

use super::cell::{Cell, Modifiers};
use crate::error::{Error, Result};
use crate::layout::Rect;
use crate::style::Rgb;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing one frame.
///
/// Access is in row-major order: `index = y * width + x`. Writes outside
/// the grid are dropped, which is how partially visible rects get clipped.
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a new buffer with every cell blank on `bg`.
    pub fn new(width: u16, height: u16, bg: Rgb) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidBufferSize { width, height });
        }
        let size = usize::from(width) * usize::from(height);
        Ok(Self {
            cells: vec![Cell::blank(bg); size],
            width,
            height,
        })
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full area of the buffer.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Convert (x, y) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Fill the part of `rect` that lies inside the buffer with `cell`.
    pub fn fill_rect(&mut self, rect: Rect, cell: &Cell) {
        let rect = rect.intersection(&self.area());
        for row in rect.y..rect.bottom() {
            for col in rect.x..rect.right() {
                if let Some(idx) = self.index_of(col, row) {
                    self.cells[idx].clone_from(cell);
                }
            }
        }
    }

    /// Reset every cell to a blank on `bg`.
    pub fn clear(&mut self, bg: Rgb) {
        self.cells.fill(Cell::blank(bg));
    }

    /// Draw `text` on row `y` starting at column `x`, never writing at or
    /// past column `limit`.
    ///
    /// Wide graphemes that would straddle `limit` are dropped. Returns the
    /// number of columns written.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_text(
        &mut self,
        x: u16,
        y: u16,
        limit: u16,
        text: &str,
        fg: Rgb,
        bg: Rgb,
        modifiers: Modifiers,
    ) -> u16 {
        let limit = limit.min(self.width);
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let Ok(width) = u16::try_from(grapheme.width()) else {
                break;
            };
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) > limit {
                break;
            }
            let cell = Cell::new(grapheme)
                .with_fg(fg)
                .with_bg(bg)
                .with_modifiers(modifiers);
            if !self.set(col, y, cell) {
                break;
            }
            for pad in 1..width {
                self.set(col + pad, y, Cell::continuation(bg));
            }
            col += width;
        }
        col - x
    }

    /// The text content of row `y`, continuations skipped.
    pub fn row_text(&self, y: u16) -> String {
        self.rows()
            .nth(usize::from(y))
            .map(|row| row.iter().map(Cell::symbol).collect())
            .unwrap_or_default()
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(self.width))
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
