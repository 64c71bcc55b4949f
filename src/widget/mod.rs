//! Widgets: Elements that paint themselves into a [`Buffer`](crate::Buffer).
//!
//! [`LabeledRect`] is the flame-graph frame; [`TooltipBar`] shows the hover
//! text of whichever rect is under the pointer.

mod labeled_rect;
mod tooltip_bar;
mod traits;

pub use labeled_rect::{
    resolve_tooltip, ClickHandler, HoverHandler, LabeledRect, RectGeometry, RectProps,
};
pub use tooltip_bar::TooltipBar;
pub use traits::Widget;
