//! Pre-loaded fonts for every text role on the cover

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::FontConfig;
use crate::coverage::GlyphCoverage;
use crate::error::CoverResult;
use crate::font::{FontFamily, FontHandle};

/// Every font a cover needs, loaded once at startup and passed into each render
///
/// The title keeps its whole family because the fitter picks its size per request;
/// every other role is fixed-size.
#[derive(Clone, Debug)]
pub struct FontSet {
    pub title: Arc<FontFamily>,
    pub caption: FontHandle,
    pub guide: FontHandle,
    pub author: FontHandle,
    pub brand: FontHandle,
    pub brand_mark: FontHandle,
}

impl FontSet {
    /// Load all families named by `config`. Each file is read once even when
    /// several roles share it.
    pub fn load(config: &FontConfig) -> CoverResult<Self> {
        let mut loaded: HashMap<PathBuf, Arc<FontFamily>> = HashMap::new();
        let mut family = |path: &Path| -> CoverResult<Arc<FontFamily>> {
            if let Some(existing) = loaded.get(path) {
                return Ok(Arc::clone(existing));
            }
            let family = Arc::new(FontFamily::load(path)?);
            loaded.insert(path.to_path_buf(), Arc::clone(&family));
            Ok(family)
        };

        let italic = family(&config.italic_path)?;
        let title = family(&config.regular_path)?;
        let brand = family(&config.brand_path)?;
        let brand_bold = family(&config.brand_bold_path)?;

        Ok(Self {
            title,
            caption: italic.at_size(config.caption_size),
            guide: italic.at_size(config.guide_size),
            author: italic.at_size(config.author_size),
            brand: brand.at_size(config.brand_size),
            brand_mark: brand_bold.at_size(config.brand_mark_size),
        })
    }

    /// A font set of outline-less families sharing one coverage set
    pub fn headless(config: &FontConfig, coverage: GlyphCoverage) -> Self {
        let italic = Arc::new(FontFamily::headless("italic", coverage.clone()));
        let title = Arc::new(FontFamily::headless("regular", coverage.clone()));
        let brand = Arc::new(FontFamily::headless("brand", coverage.clone()));
        let brand_bold = Arc::new(FontFamily::headless("brand-bold", coverage));

        Self {
            title,
            caption: italic.at_size(config.caption_size),
            guide: italic.at_size(config.guide_size),
            author: italic.at_size(config.author_size),
            brand: brand.at_size(config.brand_size),
            brand_mark: brand_bold.at_size(config.brand_mark_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoverError;

    #[test]
    fn test_load_reports_first_missing_file() {
        let config = FontConfig::in_assets(Path::new("/nonexistent/orly-assets"));
        match FontSet::load(&config) {
            Err(CoverError::FontAssetMissing { path }) => {
                assert_eq!(path, config.italic_path);
            }
            other => panic!("expected FontAssetMissing, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_headless_roles_share_italic_family() {
        let config = FontConfig::default();
        let fonts = FontSet::headless(&config, GlyphCoverage::from_chars(' '..='~'));

        assert!(Arc::ptr_eq(fonts.caption.family(), fonts.author.family()));
        assert!(Arc::ptr_eq(fonts.caption.family(), fonts.guide.family()));
        assert!(!Arc::ptr_eq(fonts.caption.family(), &fonts.title));
        assert_eq!(fonts.guide.px(), 34.0);
        assert_eq!(fonts.brand_mark.px(), 16.0);
    }
}
