// src/config.rs
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::measure::Point;

/// Font-size scan bounds for the title fitter
///
/// Both scans run from `size_max` down to, but excluding, their floor.
#[derive(Clone, Debug, PartialEq)]
pub struct FitConfig {
    pub size_max: u32,
    pub single_line_floor: u32,
    pub wrapped_floor: u32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            size_max: TITLE_SIZE_MAX,
            single_line_floor: TITLE_SINGLE_LINE_FLOOR,
            wrapped_floor: TITLE_WRAPPED_FLOOR,
        }
    }
}

impl FitConfig {
    /// Candidate sizes for an unbroken title, largest first
    pub fn single_line_sizes(&self) -> impl Iterator<Item = u32> {
        (self.single_line_floor.saturating_add(1)..=self.size_max).rev()
    }

    /// Candidate sizes for a title broken onto two lines, largest first
    pub fn wrapped_sizes(&self) -> impl Iterator<Item = u32> {
        (self.wrapped_floor.saturating_add(1)..=self.size_max).rev()
    }
}

/// Font files and the pixel size of each text role
#[derive(Clone, Debug, PartialEq)]
pub struct FontConfig {
    pub italic_path: PathBuf,
    pub regular_path: PathBuf,
    pub brand_path: PathBuf,
    pub brand_bold_path: PathBuf,
    pub caption_size: f32,
    pub guide_size: f32,
    pub author_size: f32,
    pub brand_size: f32,
    pub brand_mark_size: f32,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self::in_assets(Path::new("assets"))
    }
}

impl FontConfig {
    /// Default font files resolved against an asset directory
    pub fn in_assets(assets_dir: &Path) -> Self {
        Self {
            italic_path: assets_dir.join(FONT_ITALIC_FILE),
            regular_path: assets_dir.join(FONT_REGULAR_FILE),
            brand_path: assets_dir.join(FONT_BRAND_FILE),
            brand_bold_path: assets_dir.join(FONT_BRAND_BOLD_FILE),
            caption_size: CAPTION_SIZE,
            guide_size: GUIDE_SIZE,
            author_size: AUTHOR_SIZE,
            brand_size: BRAND_SIZE,
            brand_mark_size: BRAND_MARK_SIZE,
        }
    }
}

/// Fixed geometry of a cover, independent of its content
#[derive(Clone, Debug, PartialEq)]
pub struct CoverConfig {
    pub width: f32,
    pub height: f32,
    pub side_margin: f32,
    pub footer_margin: f32,
    pub title_band_top: f32,
    /// Space between the title band edge and the title text, on every side
    pub title_padding: f32,
    pub band_gap_above: f32,
    pub band_gap_below: f32,
    pub top_bar_height: f32,
    pub caption_top: f32,
    pub illustration_origin: Point,
    pub brand_text: String,
    pub brand_mark: String,
    /// How far the brand mark sits above the brand text
    pub brand_mark_raise: f32,
    pub fit: FitConfig,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            side_margin: SIDE_MARGIN,
            footer_margin: FOOTER_MARGIN,
            title_band_top: TITLE_BAND_TOP,
            title_padding: TITLE_PADDING,
            band_gap_above: BAND_GAP_ABOVE,
            band_gap_below: BAND_GAP_BELOW,
            top_bar_height: TOP_BAR_HEIGHT,
            caption_top: CAPTION_TOP,
            illustration_origin: Point::new(ILLUSTRATION_ORIGIN.0, ILLUSTRATION_ORIGIN.1),
            brand_text: BRAND_TEXT.to_string(),
            brand_mark: BRAND_MARK.to_string(),
            brand_mark_raise: BRAND_MARK_RAISE,
            fit: FitConfig::default(),
        }
    }
}

impl CoverConfig {
    /// Width the title text must stay strictly below
    pub fn title_available_width(&self) -> f32 {
        self.width - 2.0 * (self.side_margin + self.title_padding)
    }

    /// Where the first line of the title is drawn
    pub fn title_origin(&self) -> Point {
        Point::new(
            self.side_margin + self.title_padding,
            self.title_band_top + self.title_padding,
        )
    }
}
