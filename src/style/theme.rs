//! Theme: Named style slots consulted while rendering.

use super::{Filter, Rgb};
use crate::buffer::Modifiers;

/// Configuration for rendering labeled rectangles.
///
/// Passed explicitly to [`LabeledRect::render`](crate::LabeledRect::render)
/// and owned by a [`Scene`](crate::Scene); nothing is looked up globally.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Labels are hidden on rects narrower than this many columns.
    pub min_width_to_display_text: i32,
    /// Filter used when a rect is dimmed.
    pub dim_filter: Filter,
    /// Text modifiers applied to label cells.
    pub label_modifiers: Modifiers,
    /// Tooltip bar text color.
    pub tooltip_fg: Rgb,
    /// Tooltip bar background color.
    pub tooltip_bg: Rgb,
    /// Background for cells no rect covers.
    pub empty_bg: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            min_width_to_display_text: 3,
            dim_filter: Filter::DIM,
            label_modifiers: Modifiers::empty(),
            tooltip_fg: Rgb::WHITE,
            tooltip_bg: Rgb::new(40, 40, 40),
            empty_bg: Rgb::BLACK,
        }
    }
}

impl Theme {
    /// Override the label visibility threshold.
    #[must_use]
    pub const fn with_min_width_to_display_text(mut self, columns: i32) -> Self {
        self.min_width_to_display_text = columns;
        self
    }

    /// Override the dimming filter.
    #[must_use]
    pub const fn with_dim_filter(mut self, filter: Filter) -> Self {
        self.dim_filter = filter;
        self
    }

    /// Override the label modifiers.
    #[must_use]
    pub const fn with_label_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.label_modifiers = modifiers;
        self
    }
}
