//! Glyph coverage sets and input sanitization
//!
//! Font backends cannot draw code points that are missing from a font's character
//! map. Rather than failing (or drawing tofu boxes), text is filtered down to the
//! characters the target family actually covers before it is measured or drawn.

use std::collections::HashSet;

/// Set of Unicode code points one font family can render
///
/// Coverage is a property of the family, not of a pixel size, so a single set is
/// built per family and shared by every size derived from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphCoverage {
    codepoints: HashSet<char>,
}

impl GlyphCoverage {
    /// Build a coverage set from an explicit list of characters
    pub fn from_chars<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            codepoints: chars.into_iter().collect(),
        }
    }

    /// Build the coverage set of a parsed font from its character map
    pub fn from_font(font: &fontdue::Font) -> Self {
        Self::from_chars(font.chars().keys().copied())
    }

    /// Exact code point membership, with no normalization
    pub fn contains(&self, ch: char) -> bool {
        self.codepoints.contains(&ch)
    }

    /// Whether every character of `text` is covered
    pub fn covers(&self, text: &str) -> bool {
        text.chars().all(|ch| self.contains(ch))
    }

    pub fn len(&self) -> usize {
        self.codepoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codepoints.is_empty()
    }
}

impl FromIterator<char> for GlyphCoverage {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self::from_chars(iter)
    }
}

/// Strip every character `coverage` cannot render
///
/// Kept characters stay in their original order. Unsupported characters are
/// silently dropped, so the result may be shorter than the input or empty.
///
/// # Examples
/// ```
/// use orly_core::coverage::{sanitize, GlyphCoverage};
///
/// let latin = GlyphCoverage::from_chars(' '..='~');
/// assert_eq!(sanitize("Caf\u{e9} \u{1F600} Rust", &latin), "Caf  Rust");
/// ```
pub fn sanitize(text: &str, coverage: &GlyphCoverage) -> String {
    if coverage.covers(text) {
        return text.to_string();
    }

    let sanitized: String = text.chars().filter(|&ch| coverage.contains(ch)).collect();

    let dropped = text.chars().count() - sanitized.chars().count();
    if dropped > 0 {
        tracing::debug!("Dropped {} unsupported characters from {:?}", dropped, text);
    }

    sanitized
}
