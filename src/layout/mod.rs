//! Layout module: Screen-space geometry.
//!
//! Rendered rects keep signed geometry; [`Rect`] is the clipped, unsigned
//! area they actually cover on screen.

mod rect;

pub use rect::Rect;
