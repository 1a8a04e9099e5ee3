//! Pure calculation functions for padding layout.
//!
//! All functions here are pure and testable without any I/O or images.

use super::backend::Dimensions;
use super::params::PaddingFraction;

/// Extra horizontal squeeze applied to the content width only.
///
/// Kept at 0.9 so padded icons match the ones already shipped.
pub const WIDTH_FACTOR: f64 = 0.9;

/// Where the resized content lands on the transparent canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadLayout {
    /// Output size, always equal to the source size.
    pub canvas: Dimensions,
    /// Size of the resized content.
    pub content: Dimensions,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl PadLayout {
    /// Returns true if `(x, y)` lies inside the content rectangle.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.offset_x
            && y >= self.offset_y
            && x < self.offset_x + self.content.width
            && y < self.offset_y + self.content.height
    }
}

/// Calculate the size the content is shrunk to.
///
/// `width = floor(w * (1 - p) * 0.9)`, `height = floor(h * (1 - p))`.
///
/// # Examples
/// ```
/// # use icon_pad::imaging::{Dimensions, PaddingFraction, content_dimensions};
/// let canvas = Dimensions { width: 100, height: 100 };
/// let p = PaddingFraction::new(0.35).unwrap();
/// assert_eq!(content_dimensions(canvas, p), Dimensions { width: 58, height: 65 });
/// ```
pub fn content_dimensions(canvas: Dimensions, padding: PaddingFraction) -> Dimensions {
    let scale = padding.scale();
    // Evaluated left to right so float rounding matches the shipped assets.
    let width = (canvas.width as f64 * scale * WIDTH_FACTOR).floor() as u32;
    let height = (canvas.height as f64 * scale).floor() as u32;
    Dimensions {
        width: width.min(canvas.width),
        height: height.min(canvas.height),
    }
}

/// Offset that centers `inner` inside `outer`, biased toward the top-left
/// when the difference is odd.
pub fn center_offset(outer: u32, inner: u32) -> u32 {
    outer.saturating_sub(inner) / 2
}

/// Compute the full layout for padding an image of size `canvas`.
pub fn calculate_pad_layout(canvas: Dimensions, padding: PaddingFraction) -> PadLayout {
    let content = content_dimensions(canvas, padding);
    PadLayout {
        canvas,
        content,
        offset_x: center_offset(canvas.width, content.width),
        offset_y: center_offset(canvas.height, content.height),
    }
}
