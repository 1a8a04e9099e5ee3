//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Pad
//!
//! ```text
//! Successfully saved padded image to assets/app_icon_padded.png
//! ```
//!
//! ## Check
//!
//! ```text
//! assets/app_icon.png
//!     Canvas: 100x100
//!     Content: 58x65 at (21, 17)
//!     Padding: 0.35
//!     Output: assets/app_icon_padded.png
//! ```
//!
//! A layout whose content collapses to `0x0` gets a trailing
//! `Warning:` line, since `pad` would reject it.
//!
//! ## Errors
//!
//! Written to stderr so stdout only ever carries the success line.
//!
//! ```text
//! Error: Failed to read dimensions of assets/app_icon.png: ...
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout or stderr.
//! Format functions are pure: no I/O, no side effects.

use crate::imaging::{Dimensions, PadLayout, PadReport, PaddingFraction};
use std::path::Path;

fn format_dims(dims: Dimensions) -> String {
    format!("{}x{}", dims.width, dims.height)
}

/// Format the single success line for a completed pad.
pub fn format_pad_output(report: &PadReport) -> Vec<String> {
    vec![format!(
        "Successfully saved padded image to {}",
        report.output.display()
    )]
}

pub fn print_pad_output(report: &PadReport) {
    for line in format_pad_output(report) {
        println!("{}", line);
    }
}

/// Format the planned layout for `check`.
pub fn format_check_output(
    source: &Path,
    output: &Path,
    layout: &PadLayout,
    padding: PaddingFraction,
) -> Vec<String> {
    let mut lines = vec![
        source.display().to_string(),
        format!("    Canvas: {}", format_dims(layout.canvas)),
        format!(
            "    Content: {} at ({}, {})",
            format_dims(layout.content),
            layout.offset_x,
            layout.offset_y
        ),
        format!("    Padding: {}", padding.value()),
        format!("    Output: {}", output.display()),
    ];
    if layout.content.width == 0 || layout.content.height == 0 {
        lines.push("    Warning: content is empty, this image cannot be padded".to_string());
    }
    lines
}

pub fn print_check_output(
    source: &Path,
    output: &Path,
    layout: &PadLayout,
    padding: PaddingFraction,
) {
    for line in format_check_output(source, output, layout, padding) {
        println!("{}", line);
    }
}

/// Format the single failure line.
pub fn format_error(err: &dyn std::error::Error) -> String {
    format!("Error: {}", err)
}

pub fn print_error(err: &dyn std::error::Error) {
    eprintln!("{}", format_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::calculate_pad_layout;
    use std::path::PathBuf;

    fn layout_100() -> PadLayout {
        calculate_pad_layout(
            Dimensions {
                width: 100,
                height: 100,
            },
            PaddingFraction::default(),
        )
    }

    #[test]
    fn pad_output_is_one_line_with_path() {
        let report = PadReport {
            output: PathBuf::from("assets/app_icon_padded.png"),
            layout: layout_100(),
        };
        assert_eq!(
            format_pad_output(&report),
            vec!["Successfully saved padded image to assets/app_icon_padded.png"]
        );
    }

    #[test]
    fn check_output_shows_layout() {
        let lines = format_check_output(
            Path::new("assets/app_icon.png"),
            Path::new("assets/app_icon_padded.png"),
            &layout_100(),
            PaddingFraction::default(),
        );
        assert_eq!(
            lines,
            vec![
                "assets/app_icon.png",
                "    Canvas: 100x100",
                "    Content: 58x65 at (21, 17)",
                "    Padding: 0.35",
                "    Output: assets/app_icon_padded.png",
            ]
        );
    }

    #[test]
    fn check_output_warns_on_empty_content() {
        let layout = calculate_pad_layout(
            Dimensions {
                width: 1,
                height: 1,
            },
            PaddingFraction::default(),
        );
        let lines = format_check_output(
            Path::new("tiny.png"),
            Path::new("tiny_padded.png"),
            &layout,
            PaddingFraction::default(),
        );
        assert_eq!(lines[2], "    Content: 0x0 at (0, 0)");
        assert_eq!(
            lines.last().map(String::as_str),
            Some("    Warning: content is empty, this image cannot be padded")
        );
    }

    #[test]
    fn check_output_has_no_warning_for_normal_layout() {
        let lines = format_check_output(
            Path::new("a.png"),
            Path::new("b.png"),
            &layout_100(),
            PaddingFraction::default(),
        );
        assert!(lines.iter().all(|l| !l.contains("Warning")));
    }

    #[test]
    fn error_line_prefix() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        assert_eq!(format_error(&err), "Error: no such file");
    }
}
