//! The fields of one render request

use percent_encoding::percent_decode_str;
use rand::Rng;

use crate::constants::{DEFAULT_AUTHOR, DEFAULT_TITLE, DEFAULT_TOP_CAPTION, IMAGE_CODE_RANGE};
use crate::placement::PlacementZone;
use crate::theme::THEME_COUNT;

/// Everything a cover is rendered from. All fields are plain text; nothing here
/// is validated; unknown themes and zones resolve to defaults during layout.
#[derive(Clone, Debug, PartialEq)]
pub struct CoverRequest {
    pub title: String,
    pub top_caption: String,
    pub author: String,
    pub image_code: String,
    pub theme: String,
    pub placement: PlacementZone,
    pub guide_text: String,
}

impl Default for CoverRequest {
    /// Default text, with a random illustration and theme
    fn default() -> Self {
        let mut rng = rand::rng();
        Self {
            title: DEFAULT_TITLE.to_string(),
            top_caption: DEFAULT_TOP_CAPTION.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            image_code: rng.random_range(IMAGE_CODE_RANGE).to_string(),
            theme: rng.random_range(0..THEME_COUNT).to_string(),
            placement: PlacementZone::default(),
            guide_text: String::new(),
        }
    }
}

impl CoverRequest {
    /// Parse a `;`-separated request: title, top caption, author, image code, theme
    ///
    /// The raw text is URL-decoded (`+` is a space) and trimmed, and one trailing
    /// `;` is ignored. Each field is trimmed; fields missing from the end of the
    /// list take their default. Blank input is a single empty title field, so the
    /// title is empty and every later field takes its default.
    ///
    /// # Examples
    /// ```
    /// use orly_core::request::CoverRequest;
    ///
    /// let request = CoverRequest::parse("Writing+Code;Because+why+not;@rustacean;12;7;");
    /// assert_eq!(request.title, "Writing Code");
    /// assert_eq!(request.author, "@rustacean");
    /// assert_eq!(request.theme, "7");
    /// ```
    pub fn parse(raw: &str) -> Self {
        let mut request = Self::default();

        let plus_decoded = raw.replace('+', " ");
        let decoded = percent_decode_str(&plus_decoded).decode_utf8_lossy();
        let text = decoded.trim();
        let text = text.strip_suffix(';').unwrap_or(text);

        let mut fields = text.split(';').map(str::trim);
        let slots = [
            &mut request.title,
            &mut request.top_caption,
            &mut request.author,
            &mut request.image_code,
            &mut request.theme,
        ];
        for slot in slots {
            match fields.next() {
                Some(value) => *slot = value.to_string(),
                None => break,
            }
        }

        request
    }

    pub fn with_placement(mut self, placement: PlacementZone) -> Self {
        self.placement = placement;
        self
    }

    pub fn with_guide_text(mut self, guide_text: &str) -> Self {
        self.guide_text = guide_text.to_string();
        self
    }

    pub fn with_image_code(mut self, code: &str) -> Self {
        self.image_code = code.to_string();
        self
    }

    pub fn with_theme(mut self, theme: &str) -> Self {
        self.theme = theme.to_string();
        self
    }
}
