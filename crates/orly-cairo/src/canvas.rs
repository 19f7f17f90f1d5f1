//! Cairo image surface implementing `Canvas`

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use cairo::{Context, Format, ImageSurface, Operator};
use orly_core::font::{glyph_left, glyph_positions, line_metrics};
use orly_core::{Canvas, CoverError, CoverResult, FontHandle, Illustration, Point, Rgba};

use crate::render_error;

/// An ARGB32 cover surface
pub struct CairoCanvas {
    surface: ImageSurface,
}

impl CairoCanvas {
    /// A `width` × `height` surface filled with `background`
    pub fn new(width: i32, height: i32, background: Rgba) -> CoverResult<Self> {
        let surface = ImageSurface::create(Format::ARgb32, width, height).map_err(render_error)?;
        let canvas = Self { surface };

        let cr = canvas.context()?;
        let (r, g, b, a) = background.to_unit();
        cr.set_source_rgba(r, g, b, a);
        cr.paint().map_err(render_error)?;

        Ok(canvas)
    }

    fn context(&self) -> CoverResult<Context> {
        Context::new(&self.surface).map_err(render_error)
    }

    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    /// Straight-alpha color of one pixel, or `None` outside the surface
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgba> {
        if x < 0 || y < 0 || x >= self.width() || y >= self.height() {
            return None;
        }

        let offset = y as usize * self.surface.stride() as usize + x as usize * 4;
        let mut argb = None;
        self.surface
            .with_data(|data| {
                argb = data
                    .get(offset..offset + 4)
                    .map(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]));
            })
            .ok()?;

        argb.map(|argb| {
            let a = (argb >> 24) as u8;
            let unpremultiply = |c: u32| -> u8 {
                if a == 0 {
                    0
                } else {
                    ((c & 0xFF) * 255 / a as u32).min(255) as u8
                }
            };
            Rgba::new(unpremultiply(argb >> 16), unpremultiply(argb >> 8), unpremultiply(argb), a)
        })
    }

    /// Encode the surface as PNG
    pub fn write_png<W: Write>(&self, out: &mut W) -> CoverResult<()> {
        self.surface.flush();
        self.surface.write_to_png(out).map_err(render_error)
    }

    /// Write the surface to a PNG file and return its path
    pub fn save_png(&self, path: impl AsRef<Path>) -> CoverResult<PathBuf> {
        let path = path.as_ref();
        let mut file = File::create(path)?;
        self.write_png(&mut file)?;
        tracing::debug!("Saved cover to {}", path.display());
        Ok(path.to_path_buf())
    }
}

/// A8 mask surface for one fontdue glyph bitmap
fn glyph_mask(bitmap: &[u8], width: usize, height: usize) -> CoverResult<ImageSurface> {
    let stride = Format::A8.stride_for_width(width as u32).map_err(render_error)? as usize;
    let mut data = vec![0u8; stride * height];
    for (row, coverage) in bitmap.chunks_exact(width).enumerate().take(height) {
        data[row * stride..row * stride + width].copy_from_slice(coverage);
    }

    ImageSurface::create_for_data(data, Format::A8, width as i32, height as i32, stride as i32)
        .map_err(render_error)
}

impl Canvas for CairoCanvas {
    fn draw_text(&mut self, origin: Point, text: &str, color: Rgba, font: &FontHandle) -> CoverResult<()> {
        let face = font.face().ok_or_else(|| CoverError::RenderingFailed {
            message: format!("font family {} has no outlines to draw", font.family_id()),
        })?;
        let px = font.px();
        let metrics = line_metrics(face, px);

        let cr = self.context()?;
        let (r, g, b, a) = color.to_unit();
        cr.set_source_rgba(r, g, b, a);

        let (left, top) = (origin.x.round(), origin.y.round());
        for (index, line) in text.split('\n').enumerate() {
            let baseline = (top + metrics.ascent + metrics.line_step * index as f32).round();
            let (positions, _) = glyph_positions(face, line, px);

            for (ch, pen) in positions {
                let (glyph, bitmap): (fontdue::Metrics, Vec<u8>) = face.rasterize(ch, px);
                if glyph.width == 0 || glyph.height == 0 {
                    continue;
                }

                let mask = glyph_mask(&bitmap, glyph.width, glyph.height)?;
                // fontdue's ymin is the offset of the bitmap's bottom edge above the baseline
                let x = left + glyph_left(pen, glyph.xmin);
                let y = baseline - glyph.height as f32 - glyph.ymin as f32;
                cr.mask_surface(&mask, x as f64, y as f64).map_err(render_error)?;
            }
        }

        Ok(())
    }

    fn draw_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Rgba) -> CoverResult<()> {
        let cr = self.context()?;
        let (r, g, b, a) = color.to_unit();
        cr.set_source_rgba(r, g, b, a);
        cr.rectangle(
            top_left.x as f64,
            top_left.y as f64,
            (bottom_right.x - top_left.x + 1.0).max(0.0) as f64,
            (bottom_right.y - top_left.y + 1.0).max(0.0) as f64,
        );
        cr.fill().map_err(render_error)
    }

    fn paste_image(&mut self, image: &Illustration, origin: Point, use_alpha: bool) -> CoverResult<()> {
        let format = if image.has_alpha { Format::ARgb32 } else { Format::Rgb24 };
        let source = ImageSurface::create_for_data(
            image.data.clone(),
            format,
            image.width as i32,
            image.height as i32,
            image.stride as i32,
        )
        .map_err(|e| CoverError::InvalidIllustration {
            code: image.code.clone(),
            message: e.to_string(),
        })?;

        let cr = self.context()?;
        if !use_alpha {
            cr.set_operator(Operator::Source);
        }
        let (x, y) = (origin.x as f64, origin.y as f64);
        cr.set_source_surface(&source, x, y).map_err(render_error)?;
        cr.rectangle(x, y, image.width as f64, image.height as f64);
        cr.fill().map_err(render_error)
    }
}
