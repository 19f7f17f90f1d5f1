//! One-call cover rendering onto a cairo surface

use std::path::Path;

use orly_core::constants::{BACKGROUND, ILLUSTRATION_DIR};
use orly_core::{
    CoverComposer, CoverConfig, CoverRequest, CoverResult, FontConfig, FontSet, FontdueMeasurer,
    IllustrationSource,
};

use crate::canvas::CairoCanvas;
use crate::illustrations::PngIllustrations;

/// Lay out `request` and paint it onto a fresh canvas
///
/// The canvas is only allocated once the whole cover has been planned, so any
/// fatal error (title too long, missing illustration) leaves nothing behind.
pub fn render_cover(
    request: &CoverRequest,
    config: &CoverConfig,
    fonts: &FontSet,
    illustrations: &dyn IllustrationSource,
) -> CoverResult<CairoCanvas> {
    let composer = CoverComposer::new(config, fonts, &FontdueMeasurer, illustrations);
    let plan = composer.plan(request)?;

    let mut canvas = CairoCanvas::new(config.width.round() as i32, config.height.round() as i32, BACKGROUND)?;
    plan.paint(&mut canvas)?;

    tracing::debug!(
        "Rendered cover with title {:?} at {}px",
        plan.title.text,
        plan.title.size()
    );
    Ok(canvas)
}

/// Loaded fonts and illustrations, built once and shared by every render
pub struct CoverRenderer {
    config: CoverConfig,
    fonts: FontSet,
    illustrations: PngIllustrations,
}

impl CoverRenderer {
    pub fn new(config: CoverConfig, fonts: FontSet, illustrations: PngIllustrations) -> Self {
        Self { config, fonts, illustrations }
    }

    /// Load the default fonts and illustration directory under `assets_dir`
    pub fn from_assets(assets_dir: impl AsRef<Path>) -> CoverResult<Self> {
        let assets_dir = assets_dir.as_ref();
        let fonts = FontSet::load(&FontConfig::in_assets(assets_dir))?;
        let illustrations = PngIllustrations::new(assets_dir.join(ILLUSTRATION_DIR));
        Ok(Self::new(CoverConfig::default(), fonts, illustrations))
    }

    pub fn render(&self, request: &CoverRequest) -> CoverResult<CairoCanvas> {
        render_cover(request, &self.config, &self.fonts, &self.illustrations)
    }
}
