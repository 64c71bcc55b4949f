//! # Flamecell
//!
//! Labeled flame-graph rectangles for terminal renderers.
//!
//! Each frame of a flame graph (or tile of a tree map) is a [`LabeledRect`]:
//! a colored box with a label, built fresh from [`RectProps`] every time the
//! graph is drawn.
//!
//! ## Core Concepts
//!
//! - **Pure rendering**: [`LabeledRect::render`] maps props and a [`Theme`]
//!   to adjusted geometry, visible text, hover text and a dimming filter
//! - **Painting**: rects paint themselves into a [`Buffer`] of cells,
//!   clipped to the screen
//! - **Event forwarding**: a [`Scene`] hit-tests pointer events and calls the
//!   click, enter, leave and move handlers supplied in the props
//! - **Single write output**: [`FrameWriter`] turns a buffer into one ANSI
//!   byte stream
//!
//! ## Example
//!
//! ```rust
//! use flamecell::{Buffer, RectProps, Rgb, Scene, Theme};
//!
//! let mut scene = Scene::new(Theme::default());
//! scene.push(
//!     RectProps::new("main", 0usize)
//!         .size(40, 2)
//!         .container_width(80)
//!         .colors(Rgb::parse("#e6550d")?, Rgb::WHITE),
//! );
//!
//! let mut buffer = Buffer::new(80, 24, Rgb::BLACK)?;
//! scene.paint(&mut buffer);
//! assert!(buffer.row_text(0).starts_with(" main"));
//! # Ok::<(), flamecell::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod error;
pub mod event;
pub mod layout;
pub mod scene;
pub mod style;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use buffer::{Buffer, Cell, Modifiers};
pub use error::{Error, Result};
pub use event::{KeyModifiers, MouseButton, PointerEvent, PointerKind};
pub use layout::Rect;
pub use scene::Scene;
pub use style::{Filter, Rgb, Theme};
pub use terminal::FrameWriter;
pub use widget::{
    resolve_tooltip, ClickHandler, HoverHandler, LabeledRect, RectGeometry, RectProps,
    TooltipBar, Widget,
};
