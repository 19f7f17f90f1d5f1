// tests/cover_integration_tests.rs
//! Integration tests for realistic cover scenarios

use std::sync::Arc;

use orly::dummy_backend::StaticIllustrations;
use orly::{
    Canvas, CoverComposer, CoverConfig, CoverError, CoverRequest, CoverResult, FitConfig, FontConfig,
    FontFamily, FontHandle, FontSet, GlyphCoverage, Illustration, PlacementZone, Point, Rgba,
    TextBox, TextMeasurer, TitleFitter,
};

/// Proportional measurer: narrow letters are half as wide as the rest
struct TestMeasurer;

impl TestMeasurer {
    fn advance(ch: char) -> f32 {
        match ch {
            'i' | 'l' | 'j' | 't' | 'f' | 'I' | '.' | ',' | '\'' => 0.25,
            ' ' => 0.3,
            'm' | 'w' | 'M' | 'W' => 0.8,
            _ => 0.5,
        }
    }
}

impl TextMeasurer for TestMeasurer {
    fn measure(&self, text: &str, font: &FontHandle) -> TextBox {
        let px = font.px();
        let lines: Vec<&str> = text.split('\n').collect();
        let width = lines
            .iter()
            .map(|line| line.chars().map(Self::advance).sum::<f32>() * px)
            .fold(0.0, f32::max);
        TextBox {
            width,
            height: px * 1.1 * lines.len() as f32,
            line_heights: vec![px * 1.1; lines.len()],
        }
    }
}

/// Records what was drawn and where
#[derive(Default)]
struct TestCanvas {
    texts: Vec<(Point, String, Rgba)>,
    rectangles: Vec<(Point, Point, Rgba)>,
    images: Vec<(String, Point)>,
}

impl Canvas for TestCanvas {
    fn draw_text(&mut self, origin: Point, text: &str, color: Rgba, _font: &FontHandle) -> CoverResult<()> {
        self.texts.push((origin, text.to_string(), color));
        Ok(())
    }

    fn draw_rectangle(&mut self, top_left: Point, bottom_right: Point, color: Rgba) -> CoverResult<()> {
        self.rectangles.push((top_left, bottom_right, color));
        Ok(())
    }

    fn paste_image(&mut self, image: &Illustration, origin: Point, _use_alpha: bool) -> CoverResult<()> {
        self.images.push((image.code.clone(), origin));
        Ok(())
    }
}

fn latin_fonts() -> FontSet {
    let latin: GlyphCoverage = (' '..='~').chain('\u{a0}'..='\u{ff}').collect();
    FontSet::headless(&FontConfig::default(), latin)
}

fn compose(request: &CoverRequest) -> CoverResult<TestCanvas> {
    let config = CoverConfig::default();
    let fonts = latin_fonts();
    let illustrations = StaticIllustrations::solid_range(1..=40, 300, 300);
    let composer = CoverComposer::new(&config, &fonts, &TestMeasurer, &illustrations);

    let mut canvas = TestCanvas::default();
    composer.compose(request, &mut canvas)?;
    Ok(canvas)
}

#[test]
fn test_full_cover_from_request_text() {
    let request = CoverRequest::parse("Googling+the+Error+Message;The+internet+will+make+those+bugs+go+away;The+Practical+Developer;12;7")
        .with_guide_text("Essential")
        .with_placement(PlacementZone::TopRight);
    let canvas = compose(&request).unwrap();

    let texts: Vec<&str> = canvas.texts.iter().map(|(_, text, _)| text.as_str()).collect();
    assert_eq!(texts[0], "The internet will make those bugs go away");
    assert!(texts[1].starts_with("Googling"));
    assert_eq!(&texts[2..], ["Essential", "O RLY", "?", "The Practical Developer"]);

    assert_eq!(canvas.rectangles.len(), 2);
    assert!(canvas.rectangles.iter().all(|(_, _, color)| *color == Rgba::opaque(6, 123, 176)));
    assert_eq!(canvas.images, vec![("12".to_string(), Point::new(80.0, 40.0))]);

    // Guide text sits above the band, flush with the right margin
    let (origin, _, _) = &canvas.texts[2];
    let guide_width = TestMeasurer.measure("Essential", &latin_fonts().guide).width;
    assert!((origin.x + guide_width - 480.0).abs() < 1e-3);
    assert!(origin.y + 34.0 * 1.1 <= 400.0);
}

#[test]
fn test_title_text_matches_fit() {
    let title = "Writing Code That Nobody Else Can Read";
    let canvas = compose(&CoverRequest::parse(&format!("{};c;a;1;0", title))).unwrap();
    let drawn = &canvas.texts[1].1;

    assert_eq!(drawn.replace('\n', " "), title);
    assert!(drawn.matches('\n').count() <= 1);
}

#[test]
fn test_fitter_width_bound_across_titles() {
    let family = Arc::new(FontFamily::headless("regular", GlyphCoverage::from_chars(' '..='~')));
    let config = FitConfig::default();
    let fitter = TitleFitter::new(&family, &TestMeasurer, &config);

    let titles = [
        "Rust",
        "The Quick Brown Fox",
        "Memorizing Six Git Commands",
        "Blaming The Compiler Without Reading The Error",
        "it's fine it's fine it's fine",
    ];
    for title in titles {
        let fit = fitter.fit(title, 420.0).unwrap();
        assert!(fit.text_box.width < 420.0, "{:?} overflowed", title);
        assert_eq!(TestMeasurer.measure(&fit.text, &fit.font), fit.text_box);
        assert!(fit.size() > 34 && fit.size() <= 80);
    }
}

#[test]
fn test_short_title_prefers_full_size_over_single_line() {
    // Too wide for one line even at the single-line floor, so the first break
    // that fits at the largest size wins
    let family = Arc::new(FontFamily::headless("regular", GlyphCoverage::from_chars(' '..='~')));
    let config = FitConfig::default();
    let fit = TitleFitter::new(&family, &TestMeasurer, &config)
        .fit("The Quick Brown Fox", 420.0)
        .unwrap();

    assert_eq!(fit.text, "The Quick\nBrown Fox");
    assert_eq!(fit.size(), 80);
    assert!(fit.is_wrapped());
}

#[test]
fn test_overlong_title_aborts_whole_cover() {
    let request = CoverRequest::parse(&format!("{};c;a;1;0", "W".repeat(500)));
    match compose(&request) {
        Err(CoverError::TitleTooLong { title, .. }) => assert_eq!(title.len(), 500),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected TitleTooLong"),
    }
}

#[test]
fn test_non_latin_input_is_filtered_not_rejected() {
    let request = CoverRequest::parse("Ünïcödé Ärger 日本;ok 🎉;Zoë;2;99");
    let canvas = compose(&request).unwrap();
    let texts: Vec<&str> = canvas.texts.iter().map(|(_, text, _)| text.as_str()).collect();

    assert_eq!(texts[0], "ok ");
    assert_eq!(texts[1], "Ünïcödé Ärger ");
    assert_eq!(*texts.last().unwrap(), "Zoë");
    // Theme 99 is unknown: white accents
    assert!(canvas.rectangles.iter().all(|(_, _, color)| *color == Rgba::WHITE));
}
