//! Cell: One terminal column of painted output.

use crate::style::Rgb;
use bitflags::bitflags;
use unicode_width::UnicodeWidthStr;

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use flamecell::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0001_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A single terminal cell.
///
/// A cell holds one grapheme cluster. Wide graphemes (CJK, most emoji)
/// occupy two columns: the grapheme lives in the left cell and the right
/// cell is a continuation with an empty symbol.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Cell {
    symbol: String,
    fg: Rgb,
    bg: Rgb,
    modifiers: Modifiers,
    continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Rgb::BLACK)
    }
}

impl Cell {
    /// A space painted with the given background.
    pub fn blank(bg: Rgb) -> Self {
        Self {
            symbol: " ".to_string(),
            fg: Rgb::WHITE,
            bg,
            modifiers: Modifiers::empty(),
            continuation: false,
        }
    }

    /// Create a cell holding a grapheme cluster.
    pub fn new(grapheme: &str) -> Self {
        Self {
            symbol: grapheme.to_string(),
            ..Self::default()
        }
    }

    /// The right half of a wide grapheme.
    pub fn continuation(bg: Rgb) -> Self {
        Self {
            symbol: String::new(),
            continuation: true,
            ..Self::blank(bg)
        }
    }

    /// The grapheme held by this cell (empty for continuations).
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Display width in columns (0 for continuations).
    #[inline]
    pub fn width(&self) -> usize {
        self.symbol.width()
    }

    /// Check if this is a wide-character continuation.
    #[inline]
    pub const fn is_continuation(&self) -> bool {
        self.continuation
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Rgb {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Rgb {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

impl std::fmt::Debug for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cell")
            .field("symbol", &self.symbol)
            .field("fg", &self.fg)
            .field("bg", &self.bg)
            .field("modifiers", &self.modifiers)
            .finish_non_exhaustive()
    }
}
