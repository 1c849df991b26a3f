//! Colorized terminal text art with a labeled info panel.
//!
//! The pipeline samples a downscaled image, maps each sample to the nearest
//! color in a fixed terminal palette (or a blank space when too dark), and
//! merges the glyph grid with an overlay panel of name/value rows.

pub mod compose;
pub mod matcher;
pub mod palette;
pub mod present;
pub mod sampler;

pub use compose::OverlayEntry;
pub use palette::{AnsiColor, RESET};

use std::path::{Path, PathBuf};

use image::DynamicImage;
use thiserror::Error;

use compose::ComposeConfig;

#[derive(Error, Debug)]
pub enum ChromasciiError {
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("source image has a zero dimension")]
    InvalidImage,
    #[error("computed output height is zero; widen the output or use a taller image")]
    DegenerateOutput,
    #[error("invalid overlay file {path}: {source}")]
    OverlayConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChromasciiError>;

/// Open and decode an image, attaching the path to any failure.
pub fn load_image(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    image::open(path).map_err(|source| ChromasciiError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })
}

/// Renders images as colored glyph grids with an optional overlay panel.
pub struct Renderer {
    glyph: char,
    width: u32,
    margin: usize,
    overlay_start: usize,
    overlay: Vec<OverlayEntry>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            glyph: '#',
            width: 50,
            margin: 8,
            overlay_start: 4,
            overlay: Vec::new(),
        }
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_overlay_start(mut self, row: usize) -> Self {
        self.overlay_start = row;
        self
    }

    pub fn with_overlay(mut self, overlay: Vec<OverlayEntry>) -> Self {
        self.overlay = overlay;
        self
    }

    /// Run the pipeline: sample the image, match every cell, compose lines.
    pub fn render(&self, image: &DynamicImage) -> Result<Vec<String>> {
        let rgb = image.to_rgb8();
        let grid = sampler::sample_grid(&rgb, self.width)?;

        log::debug!(
            "layout: {}x{} cells, overlay rows {}..{}",
            grid.width,
            grid.height,
            self.overlay_start,
            (grid.height as usize).saturating_sub(compose::OVERLAY_BOTTOM_MARGIN),
        );

        let cells: Vec<_> = grid
            .samples()
            .iter()
            .map(|&s| matcher::match_sample(s, self.glyph))
            .collect();

        let cfg = ComposeConfig {
            margin_width: self.margin,
            overlay_start_row: self.overlay_start,
            overlay: &self.overlay,
        };
        Ok(compose::compose_lines(&cells, grid.width, &cfg))
    }

    /// Render and write to `out`, terminated by the trailing reset line.
    pub fn render_to<W: std::io::Write>(&self, image: &DynamicImage, out: &mut W) -> Result<()> {
        let lines = self.render(image)?;
        present::present(&lines, out)?;
        Ok(())
    }
}
