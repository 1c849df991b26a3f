//! chromascii CLI - render images as colorized text art

use chromascii::{ChromasciiError, OverlayEntry, Renderer};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "chromascii", about = "Render images as colorized text art")]
struct Args {
    /// Input image files, rendered in order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
    /// Output width in cells
    #[arg(short, long, default_value = "50")]
    width: u32,
    /// Character printed for non-blank cells
    #[arg(short, long, default_value = "#")]
    glyph: char,
    /// Spaces between the art and the overlay panel
    #[arg(short, long, default_value = "8")]
    margin: usize,
    /// First row of the overlay panel
    #[arg(long, default_value = "4")]
    overlay_start: usize,
    /// JSON file with overlay entries:
    /// [{"name", "name_color", "value", "value_color"}, ...]
    #[arg(short, long)]
    overlay: Option<PathBuf>,
}

fn load_overlay(path: &PathBuf) -> Result<Vec<OverlayEntry>, ChromasciiError> {
    std::fs::read_to_string(path)
        .map_err(serde_json::Error::io)
        .and_then(|text| serde_json::from_str(&text))
        .map_err(|source| ChromasciiError::OverlayConfig {
            path: path.clone(),
            source,
        })
}

fn main() -> ExitCode {
    let args = Args::parse();

    let overlay = match args.overlay.as_ref().map(load_overlay).transpose() {
        Ok(overlay) => overlay.unwrap_or_default(),
        Err(err) => {
            eprintln!("chromascii: {err}");
            return ExitCode::FAILURE;
        }
    };

    let renderer = Renderer::new()
        .with_width(args.width)
        .with_glyph(args.glyph)
        .with_margin(args.margin)
        .with_overlay_start(args.overlay_start)
        .with_overlay(overlay);

    let stdout = std::io::stdout();
    let mut failed = false;
    for input in &args.inputs {
        // A failed image prints nothing; the batch moves on to the next one.
        let result = chromascii::load_image(input)
            .and_then(|image| renderer.render_to(&image, &mut stdout.lock()));
        if let Err(err) = result {
            eprintln!("chromascii: {err}");
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
