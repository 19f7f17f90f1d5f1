//! ORLY Cairo - cairo drawing backend for orly-core
//!
//! Paints cover plans onto cairo image surfaces, rasterising glyphs with fontdue,
//! and reads stock illustrations from a directory of PNG files.

mod canvas;
mod illustrations;
mod render;

pub use canvas::CairoCanvas;
pub use illustrations::{illustration_from_surface, PngIllustrations};
pub use render::{render_cover, CoverRenderer};

// Re-export orly-core types for convenience
pub use orly_core::*;

use std::fmt::Display;

/// Wrap a cairo failure as a render error
pub(crate) fn render_error(err: impl Display) -> CoverError {
    CoverError::RenderingFailed {
        message: err.to_string(),
    }
}
