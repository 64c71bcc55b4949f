//! Filter: Color de-emphasis applied to dimmed rectangles.
//!
//! Dimming is done by recoloring cells rather than blending them with
//! whatever lies underneath, so overlapping labels never bleed into each
//! other while widths and positions animate.

use super::Rgb;
use std::fmt;

/// A brightness step followed by a partial desaturation.
///
/// Mirrors the CSS `brightness()` and `grayscale()` functions, applied in
/// that order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filter {
    /// Channel multiplier; `1.0` leaves the color unchanged.
    pub brightness: f32,
    /// Blend factor toward the luminance gray, clamped to `0.0..=1.0`.
    pub grayscale: f32,
}

impl Filter {
    /// The filter used for rectangles above the current selection.
    pub const DIM: Self = Self {
        brightness: 1.15,
        grayscale: 0.5,
    };

    /// A filter that leaves colors unchanged.
    pub const IDENTITY: Self = Self {
        brightness: 1.0,
        grayscale: 0.0,
    };

    /// Create a new filter.
    pub const fn new(brightness: f32, grayscale: f32) -> Self {
        Self {
            brightness,
            grayscale,
        }
    }

    /// Apply the filter to a color.
    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_sign_loss)]
    pub fn apply(&self, color: Rgb) -> Rgb {
        let scale = |c: u8| (f32::from(c) * self.brightness).clamp(0.0, 255.0);
        let (r, g, b) = (scale(color.r), scale(color.g), scale(color.b));

        let amount = self.grayscale.clamp(0.0, 1.0);
        let gray = 0.0722f32.mul_add(b, 0.2126f32.mul_add(r, 0.7152 * g));
        let mix = |c: f32| (gray - c).mul_add(amount, c).round().clamp(0.0, 255.0) as u8;

        Rgb::new(mix(r), mix(g), mix(b))
    }
}

impl Default for Filter {
    fn default() -> Self {
        Self::DIM
    }
}

impl fmt::Display for Filter {
    /// Formats as a CSS filter list, e.g. `brightness(115%) grayscale(50%)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "brightness({}%) grayscale({}%)",
            (self.brightness * 100.0).round(),
            (self.grayscale * 100.0).round()
        )
    }
}
