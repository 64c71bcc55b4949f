//! Tooltip Bar Widget: One row showing the hovered rect's hover text.
//!
//! Terminals have no native tooltips, so the hover title is surfaced in a
//! fixed row, usually at the bottom of the flame graph.

use super::traits::Widget;
use crate::buffer::{Buffer, Cell, Modifiers};
use crate::layout::Rect;
use crate::style::{Rgb, Theme};

/// A single-row tooltip display.
#[derive(Debug, Clone)]
pub struct TooltipBar {
    text: Option<String>,
    bounds: Rect,
    fg: Rgb,
    bg: Rgb,
}

impl TooltipBar {
    /// Create an empty tooltip bar with the theme's tooltip colors.
    ///
    /// Only the first row of `bounds` is used.
    pub const fn new(bounds: Rect, theme: &Theme) -> Self {
        Self {
            text: None,
            bounds,
            fg: theme.tooltip_fg,
            bg: theme.tooltip_bg,
        }
    }

    /// Replace the displayed text; `None` shows an empty bar.
    pub fn set_text(&mut self, text: Option<&str>) {
        self.text = text.map(str::to_string);
    }

    /// The displayed text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Widget for TooltipBar {
    fn area(&self) -> Option<Rect> {
        let row = Rect::new(self.bounds.x, self.bounds.y, self.bounds.width, 1);
        (!self.bounds.is_empty()).then_some(row)
    }

    fn paint(&self, buffer: &mut Buffer) {
        let Some(area) = self.area() else {
            return;
        };

        buffer.fill_rect(area, &Cell::blank(self.bg));
        if let Some(text) = &self.text {
            buffer.draw_text(
                area.x,
                area.y,
                area.right(),
                text,
                self.fg,
                self.bg,
                Modifiers::empty(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_bar_truncates() {
        let mut buffer = Buffer::new(10, 2, Rgb::BLACK).unwrap();
        let mut bar = TooltipBar::new(Rect::new(0, 1, 6, 1), &Theme::default());

        bar.set_text(Some("render_frame"));
        bar.paint(&mut buffer);

        assert_eq!(bar.text(), Some("render_frame"));
        assert_eq!(buffer.row_text(1), "render    ");
        assert_eq!(buffer.get(5, 1).unwrap().bg(), Theme::default().tooltip_bg);
        assert_eq!(buffer.get(6, 1).unwrap().bg(), Rgb::BLACK);
    }

    #[test]
    fn test_tooltip_bar_clears_when_empty() {
        let mut buffer = Buffer::new(4, 1, Rgb::BLACK).unwrap();
        let mut bar = TooltipBar::new(Rect::new(0, 0, 4, 1), &Theme::default());

        bar.set_text(Some("abcd"));
        bar.paint(&mut buffer);
        bar.set_text(None);
        bar.paint(&mut buffer);

        assert_eq!(buffer.row_text(0), "    ");
    }

    #[test]
    fn test_tooltip_bar_zero_bounds() {
        let bar = TooltipBar::new(Rect::ZERO, &Theme::default());
        assert_eq!(bar.area(), None);
    }
}
