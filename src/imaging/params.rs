//! Parameter types for image operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! (which plans the layout) and the [`backend`](super::backend) (which does
//! the actual pixel work). This separation allows swapping backends (e.g. for
//! testing with a mock) without changing operation logic.
//!
//! ## Types
//!
//! - [`PaddingFraction`] — How much the content shrinks, validated to `0 <= p < 1`.
//! - [`PadParams`] — Full specification for a pad: source, output path, planned layout.

use super::calculations::PadLayout;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ParamError {
    #[error("padding must be in [0, 1), got {0}")]
    PaddingOutOfRange(f64),
}

/// Fraction by which the content's linear size is reduced (0 ≤ p < 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingFraction(f64);

impl PaddingFraction {
    pub fn new(value: f64) -> Result<Self, ParamError> {
        if value.is_finite() && (0.0..1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ParamError::PaddingOutOfRange(value))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Linear scale applied to the content, `1 - p`.
    pub fn scale(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for PaddingFraction {
    fn default() -> Self {
        Self(0.35)
    }
}

impl std::str::FromStr for PaddingFraction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s.parse().map_err(|e| format!("{e}"))?;
        Self::new(value).map_err(|e| e.to_string())
    }
}

/// Parameters for a pad operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PadParams {
    pub source: PathBuf,
    pub output: PathBuf,
    pub layout: PadLayout,
}
