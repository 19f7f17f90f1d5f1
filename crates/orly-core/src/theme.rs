//! Accent colors selected by theme code

use crate::constants::{DEFAULT_ACCENT, THEME_PALETTE};

/// 8-bit straight-alpha color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Components scaled to `0.0..=1.0`, in r, g, b, a order
    pub fn to_unit(self) -> (f64, f64, f64, f64) {
        (
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a as f64 / 255.0,
        )
    }

    pub fn as_tuple(self) -> (u8, u8, u8, u8) {
        (self.r, self.g, self.b, self.a)
    }
}

/// Number of themes in the palette. Codes run from "0" to `THEME_COUNT - 1`.
pub const THEME_COUNT: usize = THEME_PALETTE.len();

/// Resolve a theme code to its accent color.
///
/// Codes are matched as exact strings ("7" is a theme, "07" and " 7" are not).
/// Anything unrecognised resolves to opaque white rather than failing.
pub fn theme_color(code: &str) -> Rgba {
    code.parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == code)
        .and_then(|index| THEME_PALETTE.get(index).copied())
        .unwrap_or_else(|| {
            tracing::debug!("Unknown theme code {:?}, using default accent", code);
            DEFAULT_ACCENT
        })
}
