//! Terminal output: turning painted buffers into escape sequences.

mod output;

pub use output::FrameWriter;
