use crate::error::CoverResult;
use crate::font::FontHandle;
use crate::measure::Point;
use crate::theme::Rgba;

/// Drawing surface owned by one in-progress render
///
/// Text is positioned by the top-left corner of its line box. Rectangles include
/// both corners.
pub trait Canvas {
    fn draw_text(&mut self, origin: Point, text: &str, color: Rgba, font: &FontHandle) -> CoverResult<()>;
    fn draw_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Rgba) -> CoverResult<()>;
    fn paste_image(&mut self, image: &Illustration, origin: Point, use_alpha: bool) -> CoverResult<()>;
}

/// Resolves image codes to stock illustrations
pub trait IllustrationSource {
    /// Fails with `IllustrationMissing` when `code` has no asset
    fn load_illustration(&self, code: &str) -> CoverResult<Illustration>;
}

// Data structures

/// Decoded illustration pixels
///
/// Rows are `stride` bytes apart, four bytes per pixel in premultiplied
/// native-endian ARGB (cairo's ARGB32 layout).
#[derive(Clone, Debug, PartialEq)]
pub struct Illustration {
    pub code: String,
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub stride: usize,
    /// False for opaque sources whose alpha byte is undefined
    pub has_alpha: bool,
}

impl Illustration {
    /// A solid block, mostly useful for tests
    pub fn solid(code: &str, width: usize, height: usize, color: Rgba) -> Self {
        let alpha = color.a as u32;
        let premultiply = |c: u8| ((c as u32 * alpha + 127) / 255) as u8;
        let pixel = u32::from_be_bytes([
            color.a,
            premultiply(color.r),
            premultiply(color.g),
            premultiply(color.b),
        ])
        .to_ne_bytes();

        let stride = width * 4;
        let data = pixel.iter().copied().cycle().take(stride * height).collect();

        Self {
            code: code.to_string(),
            data,
            width,
            height,
            stride,
            has_alpha: color.a != 255,
        }
    }
}
