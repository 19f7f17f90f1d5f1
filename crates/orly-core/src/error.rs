// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Failure modes of a cover render
///
/// Every variant is fatal for the render that produced it: composition aborts and
/// no partially drawn cover is returned. Unknown themes, unknown placement zones and
/// unsupported glyphs are not errors; they resolve to defaults or are dropped.
#[derive(Error, Debug)]
pub enum CoverError {
    // Layout
    #[error("Title too long: {title:?} does not fit in {available_width}px at any size or line break")]
    TitleTooLong { title: String, available_width: f32 },

    // Assets
    #[error("Font asset missing: {}", path.display())]
    FontAssetMissing { path: PathBuf },

    #[error("Invalid font data in {}: {message}", path.display())]
    InvalidFontData { path: PathBuf, message: String },

    #[error("Illustration missing for image code {code:?}")]
    IllustrationMissing { code: String },

    #[error("Invalid illustration {code:?}: {message}")]
    InvalidIllustration { code: String, message: String },

    // Drawing backend
    #[error("Render error: {message}")]
    RenderingFailed { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type CoverResult<T> = Result<T, CoverError>;
