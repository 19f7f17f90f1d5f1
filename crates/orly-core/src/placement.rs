//! Anchoring secondary text around the title band

use std::fmt;
use std::str::FromStr;

use crate::config::CoverConfig;
use crate::measure::{Point, TextBox};

/// Corner of the title band that secondary text is anchored to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlacementZone {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl PlacementZone {
    /// Parse a zone name, resolving anything unrecognised to `BottomRight`
    ///
    /// Names are matched exactly, in `top_left` or `top-left` spelling.
    pub fn parse_lossy(value: &str) -> Self {
        match value {
            "top_left" | "top-left" => Self::TopLeft,
            "top_right" | "top-right" => Self::TopRight,
            "bottom_left" | "bottom-left" => Self::BottomLeft,
            "bottom_right" | "bottom-right" => Self::BottomRight,
            _ => {
                tracing::debug!("Unknown placement zone {:?}, using bottom right", value);
                Self::BottomRight
            }
        }
    }

    pub fn is_above_band(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomRight => "bottom_right",
        }
    }
}

impl FromStr for PlacementZone {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lossy(s))
    }
}

impl fmt::Display for PlacementZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vertical extent of the drawn title band
///
/// Only known once the title has been fitted, so placement always runs after the
/// title stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TitleBand {
    pub top: f32,
    pub height: f32,
}

impl TitleBand {
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Top-left corner for a text box anchored to `zone`
///
/// Above-band zones end `gap_above` pixels above the band; below-band zones start
/// `gap_below` pixels under it. Left zones start at the side margin, right zones end
/// at it.
pub fn resolve(
    zone: PlacementZone,
    text_box: &TextBox,
    container_width: f32,
    band: TitleBand,
    config: &CoverConfig,
) -> Point {
    let x = if zone.is_left() {
        config.side_margin
    } else {
        container_width - config.side_margin - text_box.width
    };

    let y = if zone.is_above_band() {
        band.top - text_box.height - config.band_gap_above
    } else {
        band.bottom() + config.band_gap_below
    };

    Point::new(x, y)
}
