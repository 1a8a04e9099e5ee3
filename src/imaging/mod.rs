//! Image processing — pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Identify** | `image::image_dimensions` |
//! | **Pad** | Lanczos3 resize + `overlay` onto a transparent canvas |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for layout math (unit testable)
//! - **Parameters**: Data structures describing image operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, ImageBackend};
pub use calculations::{
    PadLayout, WIDTH_FACTOR, calculate_pad_layout, center_offset, content_dimensions,
};
pub use operations::{PadReport, get_dimensions, pad_image, plan_pad};
pub use params::{PadParams, PaddingFraction, ParamError};
pub use rust_backend::RustBackend;
