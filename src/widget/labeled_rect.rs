//! Labeled Rect: One frame of a flame graph.
//!
//! A [`LabeledRect`] is built from [`RectProps`] on every render pass and
//! discarded afterwards. Building is a pure function of the props and the
//! [`Theme`]:
//!
//! 1. Geometry is adjusted (see [`RectGeometry::adjust`]).
//! 2. The label is kept only if the adjusted width reaches
//!    [`Theme::min_width_to_display_text`].
//! 3. The tooltip is resolved from `tooltip`, `label` and
//!    `disable_default_tooltips`.
//! 4. Dimmed rects get the theme's [`Filter`].
//!
//! Handlers are moved into the rendered rect untouched and invoked by
//! whoever owns it (normally a [`Scene`](crate::Scene)).

use super::traits::Widget;
use crate::buffer::{Buffer, Cell, Modifiers};
use crate::event::PointerEvent;
use crate::layout::Rect;
use crate::style::{Filter, Rgb, Theme};

/// Handler invoked on click.
pub type ClickHandler = Box<dyn FnMut(&PointerEvent)>;

/// Handler invoked on enter, leave and move, with the rect's data payload.
pub type HoverHandler<D> = Box<dyn FnMut(&PointerEvent, &D)>;

/// Adjusted position and size of a rendered rect.
///
/// Width and height are signed and never floored at zero; a rect whose
/// adjusted size is zero or negative simply has no on-screen area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RectGeometry {
    /// Column of the left edge, never negative.
    pub x: i32,
    /// Row of the top edge.
    pub y: i32,
    /// Width in columns after adjustment.
    pub width: i32,
    /// Height in rows after adjustment.
    pub height: i32,
}

impl RectGeometry {
    /// Adjust raw geometry for display.
    ///
    /// A rect hanging off the left edge is pinned to column 0 and loses the
    /// overhang from its width, so labels stay left-aligned without padding
    /// that would animate out of step with the width. One column and one
    /// row are then taken off to leave a gap that reads as a border, and the
    /// width is capped to the container.
    pub fn adjust(x: i32, y: i32, width: u16, height: u16, container_width: u16) -> Self {
        let mut x = x;
        let mut width = i32::from(width);

        if x < 0 {
            width = width.saturating_add(x);
            x = 0;
        }

        let height = i32::from(height) - 1;
        let width = width.min(i32::from(container_width)).saturating_sub(1);

        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The visible on-screen area, if any.
    pub fn area(&self) -> Option<Rect> {
        Rect::from_signed(self.x, self.y, self.width, self.height)
    }
}

/// Input record for a [`LabeledRect`].
///
/// `D` is the payload identifying the node this rect visualizes; it is
/// handed back to the hover handlers.
pub struct RectProps<D> {
    /// Column of the left edge before adjustment.
    pub x: i32,
    /// Row of the top edge.
    pub y: i32,
    /// Width in columns before adjustment.
    pub width: u16,
    /// Height in rows before adjustment.
    pub height: u16,
    /// Width the rect must not exceed.
    pub container_width: u16,
    /// Fill color.
    pub background_color: Rgb,
    /// Text color.
    pub color: Rgb,
    /// Text drawn inside the rect when it is wide enough.
    pub label: String,
    /// Hover text; falls back to `label`.
    pub tooltip: Option<String>,
    /// Suppress hover text entirely.
    pub disable_default_tooltips: bool,
    /// Draw with the theme's dimming filter.
    pub is_dimmed: bool,
    /// Node payload passed to hover handlers.
    pub data: D,
    /// Called on button press.
    pub on_click: Option<ClickHandler>,
    /// Called when the pointer enters the rect.
    pub on_mouse_enter: Option<HoverHandler<D>>,
    /// Called when the pointer leaves the rect.
    pub on_mouse_leave: Option<HoverHandler<D>>,
    /// Called when the pointer moves over the rect.
    pub on_mouse_move: Option<HoverHandler<D>>,
}

impl<D> RectProps<D> {
    /// Create props with the given label and payload.
    ///
    /// Geometry starts empty and the container is unbounded
    /// (`u16::MAX` columns); colors are white on black.
    pub fn new(label: impl Into<String>, data: D) -> Self {
        Self {
            x: 0,
            y: 0,
            width: 0,
            height: 0,
            container_width: u16::MAX,
            background_color: Rgb::BLACK,
            color: Rgb::WHITE,
            label: label.into(),
            tooltip: None,
            disable_default_tooltips: false,
            is_dimmed: false,
            data,
            on_click: None,
            on_mouse_enter: None,
            on_mouse_leave: None,
            on_mouse_move: None,
        }
    }

    /// Set the top-left corner.
    #[must_use]
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the container width.
    #[must_use]
    pub fn container_width(mut self, container_width: u16) -> Self {
        self.container_width = container_width;
        self
    }

    /// Set fill and text colors.
    #[must_use]
    pub fn colors(mut self, background_color: Rgb, color: Rgb) -> Self {
        self.background_color = background_color;
        self.color = color;
        self
    }

    /// Set the tooltip override.
    #[must_use]
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Suppress hover text.
    #[must_use]
    pub fn disable_default_tooltips(mut self, disable: bool) -> Self {
        self.disable_default_tooltips = disable;
        self
    }

    /// Mark the rect as dimmed.
    #[must_use]
    pub fn dimmed(mut self, is_dimmed: bool) -> Self {
        self.is_dimmed = is_dimmed;
        self
    }

    /// Set the click handler.
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut(&PointerEvent) + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Set the enter handler.
    #[must_use]
    pub fn on_mouse_enter(mut self, handler: impl FnMut(&PointerEvent, &D) + 'static) -> Self {
        self.on_mouse_enter = Some(Box::new(handler));
        self
    }

    /// Set the leave handler.
    #[must_use]
    pub fn on_mouse_leave(mut self, handler: impl FnMut(&PointerEvent, &D) + 'static) -> Self {
        self.on_mouse_leave = Some(Box::new(handler));
        self
    }

    /// Set the move handler.
    #[must_use]
    pub fn on_mouse_move(mut self, handler: impl FnMut(&PointerEvent, &D) + 'static) -> Self {
        self.on_mouse_move = Some(Box::new(handler));
        self
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for RectProps<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RectProps")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("container_width", &self.container_width)
            .field("label", &self.label)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

/// Resolve the hover text for a rect.
pub fn resolve_tooltip(
    label: &str,
    tooltip: Option<&str>,
    disable_default_tooltips: bool,
) -> Option<String> {
    if disable_default_tooltips {
        None
    } else {
        Some(tooltip.unwrap_or(label).to_string())
    }
}

/// A rect ready to be painted and to receive pointer events.
pub struct LabeledRect<D> {
    geometry: RectGeometry,
    background_color: Rgb,
    color: Rgb,
    filter: Option<Filter>,
    title: Option<String>,
    text: String,
    label_modifiers: Modifiers,
    data: D,
    on_click: Option<ClickHandler>,
    on_mouse_enter: Option<HoverHandler<D>>,
    on_mouse_leave: Option<HoverHandler<D>>,
    on_mouse_move: Option<HoverHandler<D>>,
}

impl<D> LabeledRect<D> {
    /// Render props into a rect.
    pub fn render(props: RectProps<D>, theme: &Theme) -> Self {
        let geometry = RectGeometry::adjust(
            props.x,
            props.y,
            props.width,
            props.height,
            props.container_width,
        );

        let title = resolve_tooltip(
            &props.label,
            props.tooltip.as_deref(),
            props.disable_default_tooltips,
        );

        let text = if geometry.width >= theme.min_width_to_display_text {
            props.label
        } else {
            String::new()
        };

        Self {
            geometry,
            background_color: props.background_color,
            color: props.color,
            filter: props.is_dimmed.then_some(theme.dim_filter),
            title,
            text,
            label_modifiers: theme.label_modifiers,
            data: props.data,
            on_click: props.on_click,
            on_mouse_enter: props.on_mouse_enter,
            on_mouse_leave: props.on_mouse_leave,
            on_mouse_move: props.on_mouse_move,
        }
    }

    /// Adjusted geometry.
    pub const fn geometry(&self) -> RectGeometry {
        self.geometry
    }

    /// Adjusted left edge.
    pub const fn x(&self) -> i32 {
        self.geometry.x
    }

    /// Top edge.
    pub const fn y(&self) -> i32 {
        self.geometry.y
    }

    /// Adjusted width.
    pub const fn width(&self) -> i32 {
        self.geometry.width
    }

    /// Adjusted height.
    pub const fn height(&self) -> i32 {
        self.geometry.height
    }

    /// Fill color as given, before filtering.
    pub const fn background_color(&self) -> Rgb {
        self.background_color
    }

    /// Text color as given, before filtering.
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// The dimming filter, if the rect is dimmed.
    pub const fn filter(&self) -> Option<Filter> {
        self.filter
    }

    /// Hover text, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The label if it is shown, otherwise the empty string.
    ///
    /// When painted, the text is preceded by one blank column.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The node payload.
    pub const fn data(&self) -> &D {
        &self.data
    }

    /// Fill color with the filter applied.
    pub fn fill_color(&self) -> Rgb {
        self.filter
            .map_or(self.background_color, |f| f.apply(self.background_color))
    }

    /// Text color with the filter applied.
    pub fn text_color(&self) -> Rgb {
        self.filter.map_or(self.color, |f| f.apply(self.color))
    }

    /// Forward a click.
    pub fn click(&mut self, event: &PointerEvent) {
        if let Some(handler) = self.on_click.as_mut() {
            handler(event);
        }
    }

    /// Forward a pointer entering the rect.
    pub fn mouse_enter(&mut self, event: &PointerEvent) {
        if let Some(handler) = self.on_mouse_enter.as_mut() {
            handler(event, &self.data);
        }
    }

    /// Forward a pointer leaving the rect.
    pub fn mouse_leave(&mut self, event: &PointerEvent) {
        if let Some(handler) = self.on_mouse_leave.as_mut() {
            handler(event, &self.data);
        }
    }

    /// Forward a pointer moving over the rect.
    pub fn mouse_move(&mut self, event: &PointerEvent) {
        if let Some(handler) = self.on_mouse_move.as_mut() {
            handler(event, &self.data);
        }
    }
}

impl<D> Widget for LabeledRect<D> {
    fn area(&self) -> Option<Rect> {
        self.geometry.area()
    }

    fn paint(&self, buffer: &mut Buffer) {
        let Some(area) = self.area() else {
            log::trace!("skipping rect with no visible area: {:?}", self.geometry);
            return;
        };

        let fill = self.fill_color();
        buffer.fill_rect(area, &Cell::blank(fill));

        // The first row is the text row; if it is above the screen the label
        // is not visible at all.
        if self.text.is_empty() || self.geometry.y < 0 {
            return;
        }

        let start = area.x.saturating_add(1);
        let written = buffer.draw_text(
            start,
            area.y,
            area.right(),
            &self.text,
            self.text_color(),
            fill,
            self.label_modifiers,
        );
        log::trace!("painted {area:?} with {written} label columns");
    }
}

impl<D: std::fmt::Debug> std::fmt::Debug for LabeledRect<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabeledRect")
            .field("geometry", &self.geometry)
            .field("filter", &self.filter)
            .field("title", &self.title)
            .field("text", &self.text)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}
