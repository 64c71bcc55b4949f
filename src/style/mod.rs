//! Style module: Colors, the dimming filter, and the render theme.
//!
//! Styling is data, not lookup: every slot a rectangle is drawn with comes
//! from its props or from the [`Theme`] handed to the renderer.

mod color;
mod filter;
mod theme;

pub use color::Rgb;
pub use filter::Filter;
pub use theme::Theme;
