//! High-level image operations.
//!
//! These functions combine calculations with backend execution.
//! They take the padding setting, compute parameters, and call the backend.

use super::backend::{BackendError, Dimensions, ImageBackend};
use super::calculations::{PadLayout, calculate_pad_layout};
use super::params::{PadParams, PaddingFraction};
use std::path::{Path, PathBuf};

/// Result type for image operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// Get image dimensions using the backend.
pub fn get_dimensions(backend: &impl ImageBackend, path: &Path) -> Result<Dimensions> {
    backend.identify(path)
}

/// What a completed pad produced.
#[derive(Debug, Clone, PartialEq)]
pub struct PadReport {
    pub output: PathBuf,
    pub layout: PadLayout,
}

/// Plan a pad operation without executing it.
pub fn plan_pad(
    source: &Path,
    output: &Path,
    canvas: Dimensions,
    padding: PaddingFraction,
) -> PadParams {
    PadParams {
        source: source.to_path_buf(),
        output: output.to_path_buf(),
        layout: calculate_pad_layout(canvas, padding),
    }
}

/// Pad a single image: identify, plan, execute.
///
/// Fails before the backend writes anything when the shrunken content would
/// have a zero dimension.
pub fn pad_image(
    backend: &impl ImageBackend,
    source: &Path,
    output: &Path,
    padding: PaddingFraction,
) -> Result<PadReport> {
    let canvas = get_dimensions(backend, source)?;
    let params = plan_pad(source, output, canvas, padding);

    let content = params.layout.content;
    if content.width == 0 || content.height == 0 {
        return Err(BackendError::ProcessingFailed(format!(
            "{}x{} is too small to pad by {}",
            canvas.width,
            canvas.height,
            padding.value()
        )));
    }

    backend.pad(&params)?;

    Ok(PadReport {
        output: params.output,
        layout: params.layout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::backend::tests::{MockBackend, RecordedOp};

    fn pad(p: f64) -> PaddingFraction {
        PaddingFraction::new(p).unwrap()
    }

    #[test]
    fn get_dimensions_calls_backend() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 256,
            height: 128,
        }]);

        let dims = get_dimensions(&backend, Path::new("/icon.png")).unwrap();
        assert_eq!(
            dims,
            Dimensions {
                width: 256,
                height: 128
            }
        );
        assert!(matches!(
            &backend.get_operations()[0],
            RecordedOp::Identify(p) if p == "/icon.png"
        ));
    }

    #[test]
    fn plan_pad_computes_layout() {
        let params = plan_pad(
            Path::new("/icon.png"),
            Path::new("/icon_padded.png"),
            Dimensions {
                width: 100,
                height: 100,
            },
            pad(0.35),
        );

        assert_eq!(params.source, Path::new("/icon.png"));
        assert_eq!(params.output, Path::new("/icon_padded.png"));
        assert_eq!(params.layout.content.width, 58);
        assert_eq!(params.layout.content.height, 65);
        assert_eq!(params.layout.offset_x, 21);
        assert_eq!(params.layout.offset_y, 17);
    }

    #[test]
    fn pad_image_identifies_then_pads() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 100,
            height: 100,
        }]);

        let report = pad_image(
            &backend,
            Path::new("/assets/app_icon.png"),
            Path::new("/assets/app_icon_padded.png"),
            pad(0.35),
        )
        .unwrap();

        assert_eq!(report.output, Path::new("/assets/app_icon_padded.png"));
        assert_eq!(report.layout.offset_x, 21);

        let ops = backend.get_operations();
        assert_eq!(ops.len(), 2);
        assert!(matches!(&ops[0], RecordedOp::Identify(_)));
        assert!(matches!(
            &ops[1],
            RecordedOp::Pad { source, output, .. }
                if source == "/assets/app_icon.png" && output == "/assets/app_icon_padded.png"
        ));
    }

    #[test]
    fn pad_image_propagates_identify_error() {
        let backend = MockBackend::new();
        let result = pad_image(
            &backend,
            Path::new("/missing.png"),
            Path::new("/out.png"),
            pad(0.35),
        );

        assert!(result.is_err());
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn pad_image_rejects_empty_content() {
        let backend = MockBackend::with_dimensions(vec![Dimensions {
            width: 1,
            height: 1,
        }]);

        let result = pad_image(
            &backend,
            Path::new("/tiny.png"),
            Path::new("/out.png"),
            pad(0.35),
        );

        assert!(result.is_err());
        // Only the identify happened
        assert_eq!(backend.get_operations().len(), 1);
    }
}
