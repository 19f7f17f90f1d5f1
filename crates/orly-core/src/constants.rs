// src/constants.rs
use crate::theme::Rgba;

// Canvas constants
pub const CANVAS_WIDTH: f32 = 500.0;
pub const CANVAS_HEIGHT: f32 = 700.0;
pub const SIDE_MARGIN: f32 = 20.0;
pub const FOOTER_MARGIN: f32 = 20.0;

// Title band
pub const TITLE_BAND_TOP: f32 = 400.0;
pub const TITLE_PADDING: f32 = 20.0;
pub const BAND_GAP_ABOVE: f32 = 2.0;
pub const BAND_GAP_BELOW: f32 = 0.0;

// Decorations
pub const TOP_BAR_HEIGHT: f32 = 10.0;
pub const CAPTION_TOP: f32 = 10.0;
pub const ILLUSTRATION_ORIGIN: (f32, f32) = (80.0, 40.0);
pub const BRAND_TEXT: &str = "O RLY";
pub const BRAND_MARK: &str = "?";
pub const BRAND_MARK_RAISE: f32 = 1.0;

// Title fitting: sizes are scanned from TITLE_SIZE_MAX down to, but excluding, the floor
pub const TITLE_SIZE_MAX: u32 = 80;
pub const TITLE_SINGLE_LINE_FLOOR: u32 = 61;
pub const TITLE_WRAPPED_FLOOR: u32 = 34;

// Font files, relative to the asset directory
pub const FONT_ITALIC_FILE: &str = "fonts/Garamond LightItalic.ttf";
pub const FONT_REGULAR_FILE: &str = "fonts/Garamond Light.ttf";
pub const FONT_BRAND_FILE: &str = "fonts/HelveticaNeue-Medium.otf";
pub const FONT_BRAND_BOLD_FILE: &str = "fonts/Helvetica Bold.ttf";
pub const ILLUSTRATION_DIR: &str = "images";

// Role sizes in pixels
pub const CAPTION_SIZE: f32 = 20.0;
pub const GUIDE_SIZE: f32 = 34.0;
pub const AUTHOR_SIZE: f32 = 24.0;
pub const BRAND_SIZE: f32 = 28.0;
pub const BRAND_MARK_SIZE: f32 = 16.0;

// Request defaults
pub const DEFAULT_TITLE: &str = "Default Title";
pub const DEFAULT_TOP_CAPTION: &str = "Default Subtitle";
pub const DEFAULT_AUTHOR: &str = "Default Author";
pub const IMAGE_CODE_RANGE: std::ops::RangeInclusive<u32> = 1..=40;

// Colors
pub const BACKGROUND: Rgba = Rgba::WHITE;
pub const INK: Rgba = Rgba::BLACK;
pub const TITLE_INK: Rgba = Rgba::WHITE;
pub const DEFAULT_ACCENT: Rgba = Rgba::WHITE;

// Accent palette, indexed by theme code
pub const THEME_PALETTE: [Rgba; 17] = [
    Rgba::opaque(85, 19, 93),
    Rgba::opaque(113, 112, 110),
    Rgba::opaque(128, 27, 42),
    Rgba::opaque(184, 7, 33),
    Rgba::opaque(101, 22, 28),
    Rgba::opaque(80, 61, 189),
    Rgba::opaque(225, 17, 5),
    Rgba::opaque(6, 123, 176),
    Rgba::opaque(247, 181, 0),
    Rgba::opaque(0, 15, 118),
    Rgba::opaque(168, 0, 155),
    Rgba::opaque(0, 132, 69),
    Rgba::opaque(0, 153, 157),
    Rgba::opaque(1, 66, 132),
    Rgba::opaque(177, 0, 52),
    Rgba::opaque(55, 142, 25),
    Rgba::opaque(133, 152, 0),
];
