// src/main.rs
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use orly::{CoverRenderer, CoverRequest, PlacementZone};

/// Render an O RLY parody book cover to a PNG file
#[derive(Parser, Debug)]
#[command(name = "orly", version)]
struct Args {
    /// Request text: title;top caption;author;image code;theme (URL-encoded is fine)
    request: String,

    /// Text anchored to the title band, e.g. "The Definitive Guide"
    #[arg(long, default_value = "")]
    guide_text: String,

    /// Corner of the title band the guide text is anchored to
    #[arg(long, default_value = "bottom_right")]
    placement: String,

    /// Directory containing fonts/ and images/
    #[arg(long, default_value = "assets")]
    assets: PathBuf,

    /// Where to write the PNG
    #[arg(short, long, default_value = "cover.png")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let renderer = CoverRenderer::from_assets(&args.assets)
        .with_context(|| format!("loading assets from {}", args.assets.display()))?;

    let request = CoverRequest::parse(&args.request)
        .with_guide_text(&args.guide_text)
        .with_placement(PlacementZone::parse_lossy(&args.placement));
    tracing::info!(
        "Rendering {:?} (image {}, theme {})",
        request.title,
        request.image_code,
        request.theme
    );

    let cover = renderer.render(&request).context("rendering cover")?;
    let path = cover
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("{}", path.display());
    Ok(())
}
