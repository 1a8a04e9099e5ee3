//! # icon-pad
//!
//! Shrinks an icon's visible content and re-centers it on a transparent
//! canvas of the original size, so launchers and app stores that crop or
//! mask icons leave breathing room around the artwork.
//!
//! # Pipeline
//!
//! ```text
//! identify  input      →  canvas size
//! plan      canvas, p  →  content size + centering offset
//! pad       input      →  resize (Lanczos3) → overlay on transparent canvas → encode
//! ```
//!
//! For an `N×N` icon and padding `p` the content becomes
//! `floor(N·(1−p)·0.9) × floor(N·(1−p))`, centered with integer-division
//! offsets. The extra 0.9 applies to width only.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`imaging`] | Layout math, the [`imaging::ImageBackend`] trait and the `image`-crate backend |
//! | [`config`] | Optional `icon-pad.toml` loading and validation |
//! | [`output`] | CLI output formatting |

pub mod config;
pub mod imaging;
pub mod output;
