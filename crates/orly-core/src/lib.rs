//! ORLY Core - backend-agnostic layout engine for parody book covers
//!
//! This crate fits titles, filters text down to what each font can draw, anchors
//! secondary text around the title band and sequences the whole cover into draw
//! operations. Drawing, font rasterisation and image decoding live behind the
//! traits in [`traits`] and [`measure`].

pub mod compose;
pub mod config;
pub mod constants;
pub mod coverage;
pub mod dummy_backend;
pub mod error;
pub mod fit;
pub mod font;
pub mod measure;
pub mod placement;
pub mod request;
pub mod theme;
pub mod traits;

// Re-export main types
pub use compose::{CoverComposer, CoverPlan, DrawOp};
pub use config::{CoverConfig, FitConfig, FontConfig};
pub use coverage::{sanitize, GlyphCoverage};
pub use error::{CoverError, CoverResult};
pub use fit::{FitResult, TitleFitter, TitleLayout};
pub use font::{FontFamily, FontHandle, FontSet, FontdueMeasurer};
pub use measure::{Point, TextBox, TextMeasurer};
pub use placement::{PlacementZone, TitleBand};
pub use request::CoverRequest;
pub use theme::{theme_color, Rgba};

// Re-export traits and types
pub use traits::*;
