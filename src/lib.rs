//! ORLY - parody technical book covers
//!
//! This crate ties the layout engine in `orly-core` to the cairo backend in
//! `orly-cairo`:
//! - Title fitting with single-line shrink and two-line wrapping
//! - Glyph coverage filtering per font family
//! - Guide text anchored to any corner of the title band
//! - Theme accent colors and stock illustrations

// Re-export main types for convenience
pub use orly_cairo::{illustration_from_surface, render_cover, CairoCanvas, CoverRenderer, PngIllustrations};
pub use orly_core::*;
