//! Font families, sized handles and fontdue-backed measurement
//!
//! Families are loaded once per process and shared read-only across renders. A
//! `FontHandle` is a family at one pixel size; handles are cheap to create because
//! they only clone an `Arc`.

pub mod metrics;
pub mod set;

pub use metrics::{glyph_left, glyph_positions, ink_width, line_metrics, FontdueMeasurer, LineMetrics};
pub use set::FontSet;

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use fontdue::{Font, FontSettings};

use crate::coverage::GlyphCoverage;
use crate::error::{CoverError, CoverResult};

/// One font family: its outlines (when loaded from a file) and its coverage set
pub struct FontFamily {
    id: String,
    path: Option<PathBuf>,
    face: Option<Font>,
    coverage: GlyphCoverage,
}

impl FontFamily {
    /// Load and parse a font file, deriving its coverage set once
    pub fn load(path: impl AsRef<Path>) -> CoverResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoverError::FontAssetMissing {
                path: path.to_path_buf(),
            },
            _ => CoverError::Io { source: e },
        })?;

        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let mut family = Self::from_bytes(&id, data).map_err(|e| match e {
            CoverError::InvalidFontData { message, .. } => CoverError::InvalidFontData {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        family.path = Some(path.to_path_buf());

        tracing::debug!(
            "Loaded font family {} from {} ({} code points)",
            family.id,
            path.display(),
            family.coverage.len()
        );
        Ok(family)
    }

    /// Parse an in-memory font
    pub fn from_bytes(id: &str, data: Vec<u8>) -> CoverResult<Self> {
        let face = Font::from_bytes(data, FontSettings::default()).map_err(|message| {
            CoverError::InvalidFontData {
                path: PathBuf::from(id),
                message: message.to_string(),
            }
        })?;
        let coverage = GlyphCoverage::from_font(&face);

        Ok(Self {
            id: id.to_string(),
            path: None,
            face: Some(face),
            coverage,
        })
    }

    /// A family with a coverage set but no outlines
    ///
    /// Used for headless layout, where text is measured by a fixed-pitch model
    /// instead of real glyph metrics. Drawing backends that rasterise glyphs reject
    /// headless families.
    pub fn headless(id: &str, coverage: GlyphCoverage) -> Self {
        Self {
            id: id.to_string(),
            path: None,
            face: None,
            coverage,
        }
    }

    /// This family at `px` pixels
    pub fn at_size(self: &Arc<Self>, px: f32) -> FontHandle {
        FontHandle {
            family: Arc::clone(self),
            px,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn face(&self) -> Option<&Font> {
        self.face.as_ref()
    }

    pub fn coverage(&self) -> &GlyphCoverage {
        &self.coverage
    }
}

impl fmt::Debug for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontFamily")
            .field("id", &self.id)
            .field("path", &self.path)
            .field("headless", &self.face.is_none())
            .field("coverage", &self.coverage.len())
            .finish()
    }
}

/// A font family at a specific pixel size
#[derive(Clone, Debug)]
pub struct FontHandle {
    family: Arc<FontFamily>,
    px: f32,
}

impl FontHandle {
    pub fn family(&self) -> &Arc<FontFamily> {
        &self.family
    }

    pub fn family_id(&self) -> &str {
        self.family.id()
    }

    pub fn px(&self) -> f32 {
        self.px
    }

    pub fn coverage(&self) -> &GlyphCoverage {
        self.family.coverage()
    }

    pub fn face(&self) -> Option<&Font> {
        self.family.face()
    }
}

impl PartialEq for FontHandle {
    /// Handles are equal only when they share the same loaded family instance
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.family, &other.family) && self.px == other.px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_file() {
        let err = FontFamily::load("/nonexistent/fonts/Garamond Light.ttf").unwrap_err();
        match err {
            CoverError::FontAssetMissing { path } => {
                assert!(path.ends_with("Garamond Light.ttf"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_invalid_font_bytes() {
        let err = FontFamily::from_bytes("junk", b"not a font".to_vec()).unwrap_err();
        assert!(matches!(err, CoverError::InvalidFontData { .. }));
    }

    #[test]
    fn test_handles_share_family() {
        let family = Arc::new(FontFamily::headless(
            "test",
            GlyphCoverage::from_chars('a'..='z'),
        ));
        let small = family.at_size(12.0);
        let large = family.at_size(80.0);

        assert_eq!(small.family_id(), "test");
        assert!(Arc::ptr_eq(small.family(), large.family()));
        assert_eq!(small, family.at_size(12.0));
        assert_ne!(small, large);
        assert!(small.face().is_none());
        assert!(large.coverage().contains('q'));
    }

    #[test]
    fn test_same_size_different_instance_is_not_equal() {
        let a = Arc::new(FontFamily::headless("same", GlyphCoverage::default()));
        let b = Arc::new(FontFamily::headless("same", GlyphCoverage::default()));
        assert_ne!(a.at_size(20.0), b.at_size(20.0));
    }
}
