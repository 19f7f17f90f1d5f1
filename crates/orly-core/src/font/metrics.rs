//! Text metrics from fontdue outlines

use fontdue::Font;

use crate::font::FontHandle;
use crate::measure::{fixed_pitch_box, TextBox, TextMeasurer};

/// Advance of one character in the fixed-pitch model used for headless families
pub const HEADLESS_ADVANCE_EM: f32 = 0.5;
/// Line height of the fixed-pitch model used for headless families
pub const HEADLESS_LINE_EM: f32 = 1.2;

/// Vertical metrics of one line of text at a given size
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineMetrics {
    /// Distance from the top of the line box to the baseline
    pub ascent: f32,
    /// Height of the line box, ascent plus descent
    pub line_height: f32,
    /// Distance between the tops of consecutive lines
    pub line_step: f32,
}

/// Line metrics of `face` at `px`
pub fn line_metrics(face: &Font, px: f32) -> LineMetrics {
    match face.horizontal_line_metrics(px) {
        Some(m) => {
            let line_height = (m.ascent - m.descent).max(0.0);
            LineMetrics {
                ascent: m.ascent,
                line_height,
                line_step: m.new_line_size.max(line_height),
            }
        }
        None => LineMetrics {
            ascent: px * 0.8,
            line_height: px,
            line_step: px,
        },
    }
}

/// Pen position of every character on one line, plus the final pen position
///
/// Kerning between adjacent pairs is applied when the face provides it.
pub fn glyph_positions(face: &Font, line: &str, px: f32) -> (Vec<(char, f32)>, f32) {
    let mut positions = Vec::with_capacity(line.len());
    let mut pen = 0.0;
    let mut prev: Option<char> = None;

    for ch in line.chars() {
        if let Some(left) = prev {
            pen += face.horizontal_kern(left, ch, px).unwrap_or(0.0);
        }
        positions.push((ch, pen));
        pen += face.metrics(ch, px).advance_width;
        prev = Some(ch);
    }

    (positions, pen)
}

/// Left edge of a glyph bitmap drawn with its pen at `pen`, snapped to a whole pixel
pub fn glyph_left(pen: f32, xmin: i32) -> f32 {
    (pen + xmin as f32).round()
}

/// Right edge of the ink of one line, measured from the line origin
///
/// Whitespace and other glyphs without a bitmap contribute nothing, so trailing
/// spaces do not widen the line and an empty line is zero wide.
pub fn ink_width(face: &Font, line: &str, px: f32) -> f32 {
    let (positions, _) = glyph_positions(face, line, px);
    positions
        .into_iter()
        .filter_map(|(ch, pen)| {
            let glyph = face.metrics(ch, px);
            (glyph.width > 0 && glyph.height > 0)
                .then(|| glyph_left(pen, glyph.xmin) + glyph.width as f32)
        })
        .fold(0.0, f32::max)
}

/// Measures the ink box of text from fontdue glyph metrics
///
/// The width runs from the text origin to the rightmost inked pixel of the widest
/// line, matching where `glyph_left` places bitmaps. Headless families (no outlines) are measured with a fixed-pitch estimate.
#[derive(Clone, Copy, Debug, Default)]
pub struct FontdueMeasurer;

impl TextMeasurer for FontdueMeasurer {
    fn measure(&self, text: &str, font: &FontHandle) -> TextBox {
        let px = font.px();
        let Some(face) = font.face() else {
            tracing::trace!("Measuring headless family {} with fixed pitch", font.family_id());
            return fixed_pitch_box(text, px, HEADLESS_ADVANCE_EM, HEADLESS_LINE_EM);
        };

        let metrics = line_metrics(face, px);
        let mut width: f32 = 0.0;
        let mut line_heights = Vec::new();

        for line in text.split('\n') {
            width = width.max(ink_width(face, line, px));
            line_heights.push(metrics.line_height);
        }

        let height = metrics.line_height + metrics.line_step * (line_heights.len() - 1) as f32;

        TextBox {
            width: width.max(0.0),
            height,
            line_heights,
        }
    }
}
