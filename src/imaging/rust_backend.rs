//! Pure Rust image processing backend.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Identify | `image::image_dimensions` (header only, no full decode) |
//! | Decode (PNG, JPEG, WebP, TIFF) | `image::ImageReader` |
//! | Resize | `image::imageops::resize` with `Lanczos3` filter |
//! | Composite | `image::imageops::overlay` (source-over, content alpha as mask) |
//! | Encode (PNG, WebP lossless, TIFF) | `image::DynamicImage::write_to` |

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::PadLayout;
use super::params::PadParams;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader, RgbaImage};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output extensions whose encoders keep an alpha channel.
///
/// JPEG is decodable but never an output: the transparent border would be
/// flattened.
const OUTPUT_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("png", ImageFormat::Png),
    ("webp", ImageFormat::WebP),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
];

/// Returns the output extensions this backend can encode with alpha.
pub fn supported_output_extensions() -> Vec<&'static str> {
    OUTPUT_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.writing_enabled())
        .map(|(ext, _)| *ext)
        .collect()
}

/// Pure Rust backend using the `image` crate.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve the encoder for `path` from its extension.
fn output_format(path: &Path) -> Result<ImageFormat, BackendError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    OUTPUT_CANDIDATES
        .iter()
        .find(|(candidate, fmt)| *candidate == ext && fmt.writing_enabled())
        .map(|(_, fmt)| *fmt)
        .ok_or_else(|| {
            BackendError::ProcessingFailed(format!("Unsupported output format: {}", ext))
        })
}

/// Load and decode an image from disk.
fn load_image(path: &Path) -> Result<DynamicImage, BackendError> {
    ImageReader::open(path)
        .map_err(BackendError::Io)?
        .with_guessed_format()
        .map_err(BackendError::Io)?
        .decode()
        .map_err(|e| {
            BackendError::ProcessingFailed(format!("Failed to decode {}: {}", path.display(), e))
        })
}

/// Shrink `img` to the layout's content size and center it on a transparent
/// canvas of the layout's canvas size.
///
/// The content keeps its own alpha: fully transparent source pixels stay
/// transparent, partially transparent ones keep their coverage.
pub fn pad_rgba(img: &DynamicImage, layout: &PadLayout) -> RgbaImage {
    let rgba = img.to_rgba8();
    let content = image::imageops::resize(
        &rgba,
        layout.content.width,
        layout.content.height,
        FilterType::Lanczos3,
    );

    // `RgbaImage::new` zero-fills, so every pixel starts as (0, 0, 0, 0).
    let mut canvas = RgbaImage::new(layout.canvas.width, layout.canvas.height);
    image::imageops::overlay(
        &mut canvas,
        &content,
        i64::from(layout.offset_x),
        i64::from(layout.offset_y),
    );
    canvas
}

/// Encode `img` to `path` in `format`.
fn save_image(img: &RgbaImage, path: &Path, format: ImageFormat) -> Result<(), BackendError> {
    let file = std::fs::File::create(path).map_err(BackendError::Io)?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, format).map_err(|e| {
        BackendError::ProcessingFailed(format!("Failed to encode {}: {}", path.display(), e))
    })?;
    // Small icons fit in the buffer; a failed final write only surfaces here.
    writer.flush().map_err(BackendError::Io)
}

impl ImageBackend for RustBackend {
    fn identify(&self, path: &Path) -> Result<Dimensions, BackendError> {
        let (width, height) = image::image_dimensions(path).map_err(|e| {
            BackendError::ProcessingFailed(format!(
                "Failed to read dimensions of {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(Dimensions { width, height })
    }

    fn pad(&self, params: &PadParams) -> Result<(), BackendError> {
        // Checked before decoding so a bad output path never touches the input.
        let format = output_format(&params.output)?;

        let layout = &params.layout;
        if layout.content.width == 0 || layout.content.height == 0 {
            return Err(BackendError::ProcessingFailed(format!(
                "Padded content would be empty ({}x{})",
                layout.content.width, layout.content.height
            )));
        }

        let img = load_image(&params.source)?;
        if (img.width(), img.height()) != (layout.canvas.width, layout.canvas.height) {
            return Err(BackendError::ProcessingFailed(format!(
                "Decoded {} is {}x{}, expected {}x{}",
                params.source.display(),
                img.width(),
                img.height(),
                layout.canvas.width,
                layout.canvas.height
            )));
        }

        let padded = pad_rgba(&img, layout);
        save_image(&padded, &params.output, format)
    }
}
