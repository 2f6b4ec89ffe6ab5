use anyhow::{bail, Context};
use clap::Parser;
use rasterview::overlays::{GridOverlay, RegionOverlay};
use rasterview::{init_logging, Color, Config, PixelPoint, PixelRect, Size, Viewer};
use std::path::PathBuf;
use std::sync::Arc;

/// Render one frame of the image viewer to a PNG file.
#[derive(Parser, Debug)]
#[command(name = "rasterview", version, about)]
struct Args {
    /// Image to display
    input: PathBuf,

    /// Configuration file (JSON or TOML); defaults to the user config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Zoom factor in (0, 16], or "fit"
    #[arg(long, value_parser = parse_scale)]
    scale: Option<f64>,

    /// Panel size as WIDTHxHEIGHT, used by fit
    #[arg(long, value_parser = parse_size)]
    panel: Option<Size>,

    /// Where to write the rendered frame
    #[arg(long, short, default_value = "frame.png")]
    output: PathBuf,

    /// Draw a pixel grid every N image pixels
    #[arg(long, value_name = "N")]
    grid: Option<u32>,

    /// Outline a region given as x0,y0,x1,y1 in image pixels
    #[arg(long, value_parser = parse_rect)]
    mark: Option<PixelRect>,
}

fn parse_scale(s: &str) -> Result<f64, String> {
    if s.eq_ignore_ascii_case("fit") {
        return Ok(-1.0);
    }
    s.parse::<f64>()
        .map_err(|e| format!("invalid scale '{}': {}", s, e))
}

fn parse_size(s: &str) -> Result<Size, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{}'", s))?;
    let width = w.trim().parse::<u32>().map_err(|e| e.to_string())?;
    let height = h.trim().parse::<u32>().map_err(|e| e.to_string())?;
    if width == 0 || height == 0 {
        return Err("panel size must be non-zero".to_string());
    }
    Ok(Size::new(width, height))
}

fn parse_rect(s: &str) -> Result<PixelRect, String> {
    let values = s
        .split(',')
        .map(|v| v.trim().parse::<u32>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    match values.as_slice() {
        [x0, y0, x1, y1] => Ok(PixelRect::from_corners(
            PixelPoint::new(*x0, *y0),
            PixelPoint::new(*x1, *y1),
        )),
        _ => Err(format!("expected x0,y0,x1,y1, got '{}'", s)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load_or_default()?,
    };

    // Initialize logging
    init_logging(&config.logging)?;
    tracing::debug!("rasterview {} ({})", rasterview::VERSION, rasterview::BUILD_DATE);

    let mut viewer = Viewer::from_config(&config)?;
    if let Some(panel) = args.panel {
        viewer.set_panel_size(panel);
    }

    viewer
        .load(&args.input)
        .with_context(|| format!("cannot display {}", args.input.display()))?;

    if let Some(scale) = args.scale {
        if !viewer.set_scale(scale) {
            bail!("scale must be in (0, 16] or 'fit', got {}", scale);
        }
    }

    if let Some(spacing) = args.grid {
        viewer.add_overlay(Arc::new(GridOverlay::new(
            spacing,
            Color::rgba(0, 160, 255, 160),
        )));
    }
    if let Some(rect) = args.mark {
        let region = RegionOverlay::new(config.viewer.selection_color).with_region(rect);
        viewer.add_overlay(Arc::new(region));
    }

    let frame = viewer.render()?;
    frame.save_png(&args.output)?;
    tracing::info!(
        "Wrote {}x{} frame to {}",
        frame.width(),
        frame.height(),
        args.output.display()
    );

    println!("{}", viewer.status());
    Ok(())
}
