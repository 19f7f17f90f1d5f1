//! Title fitting
//!
//! Picks the largest size at which the title stays strictly narrower than the
//! available width. Short titles stay on one line; longer ones are broken onto two
//! lines at a single whitespace character. Sizes are scanned linearly, largest
//! first: measured width is not monotonic in size for every face (hinting and
//! kerning introduce small wobbles), so a bisection could skip a fitting size.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::FitConfig;
use crate::error::{CoverError, CoverResult};
use crate::font::{FontFamily, FontHandle};
use crate::measure::{TextBox, TextMeasurer};

/// How the fitted title is laid out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TitleLayout {
    /// The title is unchanged
    SingleLine,
    /// The whitespace character at byte offset `break_at` of the input title was
    /// replaced by a line break
    Wrapped { break_at: usize },
}

/// A title that fits, with the font it fits in
#[derive(Clone, Debug)]
pub struct FitResult {
    pub font: FontHandle,
    pub text: String,
    pub layout: TitleLayout,
    /// The measured box of `text` in `font`
    pub text_box: TextBox,
}

impl FitResult {
    pub fn size(&self) -> u32 {
        self.font.px() as u32
    }

    pub fn is_wrapped(&self) -> bool {
        matches!(self.layout, TitleLayout::Wrapped { .. })
    }
}

/// Fits titles for one family against a measurer
pub struct TitleFitter<'a> {
    family: &'a Arc<FontFamily>,
    measurer: &'a dyn TextMeasurer,
    config: &'a FitConfig,
}

impl<'a> TitleFitter<'a> {
    pub fn new(
        family: &'a Arc<FontFamily>,
        measurer: &'a dyn TextMeasurer,
        config: &'a FitConfig,
    ) -> Self {
        Self { family, measurer, config }
    }

    /// Find the first (size, layout) pair whose measured width is strictly less
    /// than `available_width`.
    ///
    /// Single-line candidates are tried first over their whole size range. Only
    /// then is every size of the wrapped range tried, with each whitespace position
    /// scanned left to right for that size. Fails with `TitleTooLong` once both
    /// ranges are exhausted.
    pub fn fit(&self, title: &str, available_width: f32) -> CoverResult<FitResult> {
        for size in self.config.single_line_sizes() {
            let font = self.family.at_size(size as f32);
            let text_box = self.measurer.measure(title, &font);
            trace!("Title at {}px: {}px wide (single line)", size, text_box.width);

            if text_box.width < available_width {
                debug!("Title fits on one line at {}px", size);
                return Ok(FitResult {
                    font,
                    text: title.to_string(),
                    layout: TitleLayout::SingleLine,
                    text_box,
                });
            }
        }

        let breaks = break_candidates(title);
        for size in self.config.wrapped_sizes() {
            let font = self.family.at_size(size as f32);

            for &break_at in &breaks {
                let wrapped = break_title(title, break_at);
                let text_box = self.measurer.measure(&wrapped, &font);
                trace!(
                    "Title at {}px broken at {}: {}px wide",
                    size,
                    break_at,
                    text_box.width
                );

                if text_box.width < available_width {
                    debug!("Title fits on two lines at {}px, break at byte {}", size, break_at);
                    return Ok(FitResult {
                        font,
                        text: wrapped,
                        layout: TitleLayout::Wrapped { break_at },
                        text_box,
                    });
                }
            }
        }

        debug!("Title {:?} does not fit in {}px", title, available_width);
        Err(CoverError::TitleTooLong {
            title: title.to_string(),
            available_width,
        })
    }
}

/// Byte offsets of every whitespace character, left to right
pub fn break_candidates(title: &str) -> Vec<usize> {
    title
        .char_indices()
        .filter(|(_, ch)| ch.is_whitespace())
        .map(|(index, _)| index)
        .collect()
}

/// Replace the whitespace character starting at `break_at` with a line break
pub fn break_title(title: &str, break_at: usize) -> String {
    let rest = &title[break_at..];
    let ws_len = rest.chars().next().map_or(0, char::len_utf8);

    let mut wrapped = String::with_capacity(title.len());
    wrapped.push_str(&title[..break_at]);
    wrapped.push('\n');
    wrapped.push_str(&rest[ws_len..]);
    wrapped
}
