//! Text measurement results and the measuring collaborator

use crate::font::FontHandle;

/// A position on the canvas, in pixels from the top-left corner
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Measured extent of a string set in one font
///
/// A box is only meaningful for the exact `FontHandle` that produced it; boxes are
/// recomputed whenever the size or the text changes and never reused across fonts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextBox {
    pub width: f32,
    pub height: f32,
    /// Height of each line, top to bottom. A single-line box has one entry.
    pub line_heights: Vec<f32>,
}

impl TextBox {
    pub fn line_count(&self) -> usize {
        self.line_heights.len()
    }
}

/// Measures the box a backend would draw for `text` in `font`
///
/// Multi-line text (containing `'\n'`) is measured as one block: the width of the
/// widest line and the height of all lines stacked.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontHandle) -> TextBox;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font: &FontHandle) -> TextBox {
        (**self).measure(text, font)
    }
}

/// Box for text set in an idealised fixed-pitch face
///
/// Every character advances `advance_em * px`; every line is `line_em * px` tall.
pub fn fixed_pitch_box(text: &str, px: f32, advance_em: f32, line_em: f32) -> TextBox {
    let line_height = (line_em * px).max(0.0);
    let mut width: f32 = 0.0;
    let mut line_heights = Vec::new();

    for line in text.split('\n') {
        width = width.max(line.chars().count() as f32 * advance_em * px);
        line_heights.push(line_height);
    }

    TextBox {
        width: width.max(0.0),
        height: line_height * line_heights.len() as f32,
        line_heights,
    }
}
