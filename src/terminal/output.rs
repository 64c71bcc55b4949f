//! `FrameWriter`: Serialize a whole buffer into one ANSI write.

use crate::buffer::{Buffer, Modifiers};
use crate::style::Rgb;
use std::io::Write;

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// A frame is accumulated here, then flushed with a single `write_all` so
/// the terminal never shows a half-drawn flame graph.
#[derive(Debug, Default)]
pub struct FrameWriter {
    data: Vec<u8>,
}

impl FrameWriter {
    /// Create a writer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Get the buffered bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Discard buffered bytes.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Append the escape sequences that draw `buffer` from the top-left
    /// corner of the screen.
    ///
    /// Colors and modifiers are only re-emitted when they change between
    /// consecutive cells. Attributes are reset at the end of the frame.
    pub fn write_frame(&mut self, buffer: &Buffer) {
        let mut fg: Option<Rgb> = None;
        let mut bg: Option<Rgb> = None;
        let mut modifiers: Option<Modifiers> = None;

        for (y, row) in buffer.rows().enumerate() {
            self.cursor_move(0, y);
            for cell in row {
                if cell.is_continuation() {
                    continue;
                }
                if modifiers != Some(cell.modifiers()) {
                    // SGR 0 also drops colors, so both must be re-sent.
                    self.reset_attrs();
                    self.set_modifiers(cell.modifiers());
                    modifiers = Some(cell.modifiers());
                    fg = None;
                    bg = None;
                }
                if fg != Some(cell.fg()) {
                    self.set_fg(cell.fg());
                    fg = Some(cell.fg());
                }
                if bg != Some(cell.bg()) {
                    self.set_bg(cell.bg());
                    bg = Some(cell.bg());
                }
                self.data.extend_from_slice(cell.symbol().as_bytes());
            }
        }
        self.reset_attrs();
    }

    /// Move cursor to (x, y) position (1-indexed for ANSI).
    #[inline]
    fn cursor_move(&mut self, x: usize, y: usize) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};{}H", y + 1, x + 1);
    }

    #[inline]
    fn set_fg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[38;2;{};{};{}m", color.r, color.g, color.b);
    }

    #[inline]
    fn set_bg(&mut self, color: Rgb) {
        let _ = write!(self.data, "\x1b[48;2;{};{};{}m", color.r, color.g, color.b);
    }

    fn set_modifiers(&mut self, modifiers: Modifiers) {
        const CODES: [(Modifiers, &[u8]); 5] = [
            (Modifiers::BOLD, b"\x1b[1m"),
            (Modifiers::DIM, b"\x1b[2m"),
            (Modifiers::ITALIC, b"\x1b[3m"),
            (Modifiers::UNDERLINE, b"\x1b[4m"),
            (Modifiers::REVERSED, b"\x1b[7m"),
        ];
        for (flag, code) in CODES {
            if modifiers.contains(flag) {
                self.data.extend_from_slice(code);
            }
        }
    }

    #[inline]
    fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Flush to a writer in a single call.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}
