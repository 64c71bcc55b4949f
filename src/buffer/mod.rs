//! Buffer module: The cell grid rectangles are painted into.
//!
//! This module contains:
//! - [`Cell`]: One painted column holding a grapheme and its colors
//! - [`Buffer`]: A grid of cells representing one frame
//! - [`Modifiers`]: Text style bitflags

mod cell;
#[allow(clippy::module_inception)]
mod buffer;

pub use buffer::Buffer;
pub use cell::{Cell, Modifiers};
