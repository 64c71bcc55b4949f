//! Widget trait shared by everything that paints into a [`Buffer`].

use crate::buffer::Buffer;
use crate::layout::Rect;

/// A rendered element that can be painted into a buffer.
///
/// Widgets are immutable once built; a new frame builds new widgets.
pub trait Widget {
    /// The on-screen area this widget covers, or `None` if it is invisible.
    fn area(&self) -> Option<Rect>;

    /// Paint this widget into the buffer.
    ///
    /// The widget only writes cells inside its area; cells outside the
    /// buffer are clipped.
    fn paint(&self, buffer: &mut Buffer);
}
