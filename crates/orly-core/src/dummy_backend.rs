//! Headless collaborators for testing layout without fonts, cairo or asset files

use std::collections::HashMap;

use crate::error::{CoverError, CoverResult};
use crate::font::FontHandle;
use crate::measure::{fixed_pitch_box, Point, TextBox, TextMeasurer};
use crate::theme::Rgba;
use crate::traits::{Canvas, Illustration, IllustrationSource};

/// Fixed-pitch measurer: every character is `advance_em` wide, every line 1em tall
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DummyMeasurer {
    pub advance_em: f32,
    pub line_em: f32,
}

impl Default for DummyMeasurer {
    fn default() -> Self {
        Self { advance_em: 0.5, line_em: 1.0 }
    }
}

impl DummyMeasurer {
    pub fn with_advance(advance_em: f32) -> Self {
        Self { advance_em, ..Self::default() }
    }
}

impl TextMeasurer for DummyMeasurer {
    fn measure(&self, text: &str, font: &FontHandle) -> TextBox {
        fixed_pitch_box(text, font.px(), self.advance_em, self.line_em)
    }
}

/// One recorded canvas call
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasCall {
    Text {
        origin: Point,
        text: String,
        color: Rgba,
        family: String,
        px: f32,
    },
    Rectangle {
        top_left: Point,
        bottom_right: Point,
        color: Rgba,
    },
    Image {
        code: String,
        origin: Point,
        use_alpha: bool,
    },
}

/// Canvas that records every call instead of drawing
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<CanvasCall>,
    /// When set, the call with this index fails with `RenderingFailed`
    pub fail_at: Option<usize>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every recorded text call, in order
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                CanvasCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Origin of the first text call that drew exactly `needle`
    pub fn text_origin(&self, needle: &str) -> Option<Point> {
        self.calls.iter().find_map(|call| match call {
            CanvasCall::Text { origin, text, .. } if text == needle => Some(*origin),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: CanvasCall) -> CoverResult<()> {
        if self.fail_at == Some(self.calls.len()) {
            return Err(CoverError::RenderingFailed {
                message: format!("injected failure at call {}", self.calls.len()),
            });
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Canvas for RecordingCanvas {
    fn draw_text(&mut self, origin: Point, text: &str, color: Rgba, font: &FontHandle) -> CoverResult<()> {
        self.record(CanvasCall::Text {
            origin,
            text: text.to_string(),
            color,
            family: font.family_id().to_string(),
            px: font.px(),
        })
    }

    fn draw_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Rgba) -> CoverResult<()> {
        self.record(CanvasCall::Rectangle { top_left, bottom_right, color })
    }

    fn paste_image(&mut self, image: &Illustration, origin: Point, use_alpha: bool) -> CoverResult<()> {
        self.record(CanvasCall::Image {
            code: image.code.clone(),
            origin,
            use_alpha,
        })
    }
}

/// In-memory illustration lookup
#[derive(Debug, Default)]
pub struct StaticIllustrations {
    images: HashMap<String, Illustration>,
}

impl StaticIllustrations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, image: Illustration) -> Self {
        self.images.insert(image.code.clone(), image);
        self
    }

    /// Solid placeholder illustrations for every code in `codes`
    pub fn solid_range(codes: std::ops::RangeInclusive<u32>, width: usize, height: usize) -> Self {
        codes.fold(Self::new(), |source, code| {
            source.with(Illustration::solid(&code.to_string(), width, height, Rgba::BLACK))
        })
    }
}

impl IllustrationSource for StaticIllustrations {
    fn load_illustration(&self, code: &str) -> CoverResult<Illustration> {
        self.images
            .get(code)
            .cloned()
            .ok_or_else(|| CoverError::IllustrationMissing { code: code.to_string() })
    }
}
