//! Cover composition
//!
//! A render runs in two steps. `CoverComposer::plan` sanitizes every field, fits the
//! title, measures and places the remaining text and loads the illustration,
//! producing an ordered list of draw operations without touching a canvas. Only a
//! complete plan is painted, so a render either draws everything or nothing.

use tracing::{debug, trace};

use crate::config::CoverConfig;
use crate::constants::{INK, TITLE_INK};
use crate::coverage::sanitize;
use crate::error::CoverResult;
use crate::fit::{FitResult, TitleFitter};
use crate::font::{FontHandle, FontSet};
use crate::measure::{Point, TextMeasurer};
use crate::placement::{self, TitleBand};
use crate::request::CoverRequest;
use crate::theme::{theme_color, Rgba};
use crate::traits::{Canvas, Illustration, IllustrationSource};

/// One positioned drawing step
#[derive(Clone, Debug)]
pub enum DrawOp {
    Rectangle {
        top_left: Point,
        bottom_right: Point,
        color: Rgba,
    },
    Text {
        origin: Point,
        text: String,
        color: Rgba,
        font: FontHandle,
    },
    Image {
        illustration: Illustration,
        origin: Point,
        use_alpha: bool,
    },
}

/// A fully laid out cover, ready to paint
#[derive(Clone, Debug)]
pub struct CoverPlan {
    pub ops: Vec<DrawOp>,
    pub title: FitResult,
    pub band: TitleBand,
    pub accent: Rgba,
}

impl CoverPlan {
    /// Replay every operation onto `canvas`, stopping at the first failure
    pub fn paint(&self, canvas: &mut dyn Canvas) -> CoverResult<()> {
        for op in &self.ops {
            match op {
                DrawOp::Rectangle { top_left, bottom_right, color } => {
                    canvas.draw_rectangle(*top_left, *bottom_right, *color)?
                }
                DrawOp::Text { origin, text, color, font } => {
                    canvas.draw_text(*origin, text, *color, font)?
                }
                DrawOp::Image { illustration, origin, use_alpha } => {
                    canvas.paste_image(illustration, *origin, *use_alpha)?
                }
            }
        }
        Ok(())
    }
}

/// Lays out covers for one configuration, font set and set of collaborators
pub struct CoverComposer<'a> {
    config: &'a CoverConfig,
    fonts: &'a FontSet,
    measurer: &'a dyn TextMeasurer,
    illustrations: &'a dyn IllustrationSource,
}

impl<'a> CoverComposer<'a> {
    pub fn new(
        config: &'a CoverConfig,
        fonts: &'a FontSet,
        measurer: &'a dyn TextMeasurer,
        illustrations: &'a dyn IllustrationSource,
    ) -> Self {
        Self { config, fonts, measurer, illustrations }
    }

    /// Plan a cover and paint it onto `canvas`
    pub fn compose(&self, request: &CoverRequest, canvas: &mut dyn Canvas) -> CoverResult<CoverPlan> {
        let plan = self.plan(request)?;
        plan.paint(canvas)?;
        Ok(plan)
    }

    /// Lay out a cover without drawing it
    pub fn plan(&self, request: &CoverRequest) -> CoverResult<CoverPlan> {
        let config = self.config;
        let accent = theme_color(&request.theme);
        debug!(
            "Planning cover: theme {:?}, image {:?}, placement {}",
            request.theme, request.image_code, request.placement
        );

        let mut ops = Vec::new();

        ops.push(DrawOp::Rectangle {
            top_left: Point::new(config.side_margin, 0.0),
            bottom_right: Point::new(config.width - config.side_margin, config.top_bar_height),
            color: accent,
        });
        self.caption_stage(&request.top_caption, &mut ops);

        let (title, band) = self.title_stage(&request.title)?;
        ops.push(DrawOp::Rectangle {
            top_left: Point::new(config.side_margin, band.top),
            bottom_right: Point::new(config.width - config.side_margin, band.bottom()),
            color: accent,
        });
        push_text(&mut ops, config.title_origin(), title.text.clone(), TITLE_INK, &title.font);

        self.guide_stage(request, band, &mut ops);
        self.brand_stage(accent, &mut ops);
        self.author_stage(&request.author, &mut ops);

        let illustration = self.illustrations.load_illustration(&request.image_code)?;
        ops.push(DrawOp::Image {
            illustration,
            origin: config.illustration_origin,
            use_alpha: true,
        });

        debug!("Planned {} draw operations", ops.len());
        Ok(CoverPlan { ops, title, band, accent })
    }

    /// Fit the title and derive the band it occupies
    fn title_stage(&self, raw_title: &str) -> CoverResult<(FitResult, TitleBand)> {
        let title = sanitize(raw_title, self.fonts.title.coverage());
        let fitter = TitleFitter::new(&self.fonts.title, self.measurer, &self.config.fit);
        let fitted = fitter.fit(&title, self.config.title_available_width())?;

        let band = TitleBand {
            top: self.config.title_band_top,
            height: fitted.text_box.height + 2.0 * self.config.title_padding,
        };
        Ok((fitted, band))
    }

    /// Top caption, centered horizontally
    fn caption_stage(&self, raw: &str, ops: &mut Vec<DrawOp>) {
        let font = &self.fonts.caption;
        let text = sanitize(raw, font.coverage());
        let text_box = self.measurer.measure(&text, font);
        let origin = Point::new(
            self.config.width / 2.0 - text_box.width / 2.0,
            self.config.caption_top,
        );
        push_text(ops, origin, text, INK, font);
    }

    /// Guide text, anchored to the title band
    fn guide_stage(&self, request: &CoverRequest, band: TitleBand, ops: &mut Vec<DrawOp>) {
        let font = &self.fonts.guide;
        let text = sanitize(&request.guide_text, font.coverage());
        let text_box = self.measurer.measure(&text, font);
        let origin = placement::resolve(request.placement, &text_box, self.config.width, band, self.config);
        push_text(ops, origin, text, INK, font);
    }

    /// Brand text in the bottom-left corner, with the mark in the accent color
    fn brand_stage(&self, accent: Rgba, ops: &mut Vec<DrawOp>) {
        let config = self.config;
        let font = &self.fonts.brand;
        let text_width = self.measurer.measure(&config.brand_text, font).width;
        let origin = Point::new(
            config.side_margin,
            config.height - font.px() - config.footer_margin,
        );

        push_text(ops, origin, config.brand_text.clone(), INK, font);
        push_text(
            ops,
            Point::new(origin.x + text_width, origin.y - config.brand_mark_raise),
            config.brand_mark.clone(),
            accent,
            &self.fonts.brand_mark,
        );
    }

    /// Author in the bottom-right corner
    fn author_stage(&self, raw: &str, ops: &mut Vec<DrawOp>) {
        let config = self.config;
        let font = &self.fonts.author;
        let text = sanitize(raw, font.coverage());
        let text_width = self.measurer.measure(&text, font).width;
        let origin = Point::new(
            config.width - text_width - config.side_margin,
            config.height - font.px() - config.footer_margin,
        );
        push_text(ops, origin, text, INK, font);
    }
}

fn push_text(ops: &mut Vec<DrawOp>, origin: Point, text: String, color: Rgba, font: &FontHandle) {
    if text.is_empty() {
        trace!("Skipping empty text at ({}, {})", origin.x, origin.y);
        return;
    }
    ops.push(DrawOp::Text { origin, text, color, font: font.clone() });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontConfig;
    use crate::coverage::GlyphCoverage;
    use crate::dummy_backend::{CanvasCall, DummyMeasurer, RecordingCanvas, StaticIllustrations};
    use crate::error::CoverError;
    use crate::placement::PlacementZone;

    struct Fixture {
        config: CoverConfig,
        fonts: FontSet,
        measurer: DummyMeasurer,
        illustrations: StaticIllustrations,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                config: CoverConfig::default(),
                fonts: FontSet::headless(&FontConfig::default(), GlyphCoverage::from_chars(' '..='~')),
                measurer: DummyMeasurer::default(),
                illustrations: StaticIllustrations::solid_range(1..=40, 4, 4),
            }
        }

        fn composer(&self) -> CoverComposer<'_> {
            CoverComposer::new(&self.config, &self.fonts, &self.measurer, &self.illustrations)
        }
    }

    fn request(title: &str) -> CoverRequest {
        CoverRequest::parse(&format!("{};Caption;Jane Doe;3;7", title))
            .with_guide_text("Pocket Guide")
    }

    #[test]
    fn test_draw_order() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        fixture.composer().compose(&request("Rust"), &mut canvas).unwrap();

        assert_eq!(canvas.texts(), vec!["Caption", "Rust", "Pocket Guide", "O RLY", "?", "Jane Doe"]);
        assert!(matches!(canvas.calls.first(), Some(CanvasCall::Rectangle { .. })));
        assert!(matches!(
            canvas.calls.last(),
            Some(CanvasCall::Image { code, use_alpha: true, .. }) if code == "3"
        ));
    }

    #[test]
    fn test_accent_color_on_bars_and_mark() {
        let fixture = Fixture::new();
        let plan = fixture.composer().plan(&request("Rust")).unwrap();
        let accent = Rgba::opaque(6, 123, 176);
        assert_eq!(plan.accent, accent);

        let accented = plan
            .ops
            .iter()
            .filter(|op| match op {
                DrawOp::Rectangle { color, .. } | DrawOp::Text { color, .. } => *color == accent,
                DrawOp::Image { .. } => false,
            })
            .count();
        assert_eq!(accented, 3);
    }

    #[test]
    fn test_title_band_follows_title_height() {
        let fixture = Fixture::new();
        let plan = fixture.composer().plan(&request("Rust")).unwrap();

        // One line at 80px with a 1em line height, plus 20px padding either side
        assert_eq!(plan.title.size(), 80);
        assert_eq!(plan.band, TitleBand { top: 400.0, height: 120.0 });

        let band_rect = plan.ops.iter().find_map(|op| match op {
            DrawOp::Rectangle { top_left, bottom_right, .. } if top_left.y == 400.0 => {
                Some((*top_left, *bottom_right))
            }
            _ => None,
        });
        assert_eq!(band_rect, Some((Point::new(20.0, 400.0), Point::new(480.0, 520.0))));
    }

    #[test]
    fn test_wrapped_title_grows_band_and_moves_guide() {
        let fixture = Fixture::new();
        let short = fixture.composer().plan(&request("Rust")).unwrap();
        let long = fixture
            .composer()
            .plan(&request("Ignoring Deprecation Warnings For Fun"))
            .unwrap();

        assert!(long.title.is_wrapped());
        let guide_y = |plan: &CoverPlan| {
            plan.ops.iter().find_map(|op| match op {
                DrawOp::Text { text, origin, .. } if text == "Pocket Guide" => Some(origin.y),
                _ => None,
            })
        };
        assert_eq!(guide_y(&short), Some(short.band.bottom()));
        assert_eq!(guide_y(&long), Some(long.band.bottom()));
    }

    #[test]
    fn test_guide_above_band() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        let req = request("Rust").with_placement(PlacementZone::TopLeft);
        fixture.composer().compose(&req, &mut canvas).unwrap();

        // 34px guide font, 1em lines, 2px gap above the band at 400
        assert_eq!(canvas.text_origin("Pocket Guide"), Some(Point::new(20.0, 364.0)));
    }

    #[test]
    fn test_footer_positions() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        fixture.composer().compose(&request("Rust"), &mut canvas).unwrap();

        // Brand: 28px at y = 700 - 28 - 20; "O RLY" is 5 * 14px wide
        assert_eq!(canvas.text_origin("O RLY"), Some(Point::new(20.0, 652.0)));
        assert_eq!(canvas.text_origin("?"), Some(Point::new(90.0, 651.0)));
        // Author: 24px, 8 chars * 12px = 96px wide
        assert_eq!(canvas.text_origin("Jane Doe"), Some(Point::new(384.0, 656.0)));
        // Caption: 20px, 7 chars * 10px, centered
        assert_eq!(canvas.text_origin("Caption"), Some(Point::new(215.0, 10.0)));
    }

    #[test]
    fn test_unsupported_glyphs_are_dropped() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        let req = CoverRequest::parse("Rust 🦀;Caption;José;3;7");
        fixture.composer().compose(&req, &mut canvas).unwrap();

        assert!(canvas.texts().contains(&"Rust "));
        assert!(canvas.texts().contains(&"Jos"));
    }

    #[test]
    fn test_unknown_theme_uses_white() {
        let fixture = Fixture::new();
        let plan = fixture
            .composer()
            .plan(&request("Rust").with_theme("99"))
            .unwrap();
        assert_eq!(plan.accent, Rgba::WHITE);
    }

    #[test]
    fn test_title_too_long_draws_nothing() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        let err = fixture
            .composer()
            .compose(&request(&"x".repeat(500)), &mut canvas)
            .unwrap_err();

        assert!(matches!(err, CoverError::TitleTooLong { .. }));
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_missing_illustration_draws_nothing() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        let err = fixture
            .composer()
            .compose(&request("Rust").with_image_code("41"), &mut canvas)
            .unwrap_err();

        assert!(matches!(err, CoverError::IllustrationMissing { ref code } if code == "41"));
        assert!(canvas.calls.is_empty());
    }

    #[test]
    fn test_canvas_failure_propagates() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas { fail_at: Some(2), ..Default::default() };
        let err = fixture.composer().compose(&request("Rust"), &mut canvas).unwrap_err();
        assert!(matches!(err, CoverError::RenderingFailed { .. }));
    }

    #[test]
    fn test_empty_fields_are_not_drawn() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        let req = CoverRequest::parse("Rust;;;3;7");
        fixture.composer().compose(&req, &mut canvas).unwrap();
        assert_eq!(canvas.texts(), vec!["Rust", "O RLY", "?"]);
    }

    #[test]
    fn test_blank_request_has_empty_title() {
        let fixture = Fixture::new();
        let mut canvas = RecordingCanvas::new();
        let plan = fixture
            .composer()
            .compose(&CoverRequest::parse(";"), &mut canvas)
            .unwrap();

        assert_eq!(plan.title.text, "");
        assert_eq!(plan.title.size(), 80);
        assert_eq!(canvas.texts(), vec!["Default Subtitle", "O RLY", "?", "Default Author"]);
    }
}
