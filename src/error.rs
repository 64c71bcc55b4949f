//! Error type shared across the crate.

/// Errors raised while building render inputs.
///
/// Geometry is never validated; only values that must be parsed or
/// allocated can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A color string was not `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a known name.
    #[error("invalid color {input:?}")]
    InvalidColor {
        /// The rejected input.
        input: String,
    },
    /// A buffer was requested with a zero dimension.
    #[error("invalid buffer size {width}x{height}")]
    InvalidBufferSize {
        /// Requested width in columns.
        width: u16,
        /// Requested height in rows.
        height: u16,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
