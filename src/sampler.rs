//! Downsamples a source image to a character grid of averaged RGB samples.

use image::RgbImage;

use crate::{ChromasciiError, Result};

/// Terminal glyph cells are roughly twice as tall as wide; the row count is
/// compressed by this factor to keep the displayed aspect ratio. Changing it
/// changes the output of every render.
const VERTICAL_COMPRESSION: f32 = 0.55;

/// Row-major grid of samples, one per output cell.
pub struct SampleGrid {
    pub width: u32,
    pub height: u32,
    samples: Vec<(u8, u8, u8)>,
}

impl SampleGrid {
    pub fn samples(&self) -> &[(u8, u8, u8)] {
        &self.samples
    }

    pub fn get(&self, x: u32, y: u32) -> (u8, u8, u8) {
        self.samples[(y * self.width + x) as usize]
    }
}

/// Output row count for a source of the given dimensions.
pub fn output_height(source_width: u32, source_height: u32, output_width: u32) -> u32 {
    let aspect = source_height as f32 / source_width as f32;
    (output_width as f32 * aspect * VERTICAL_COMPRESSION) as u32
}

/// Downsample `image` to `output_width` columns, averaging every source
/// pixel that falls inside each cell's region.
pub fn sample_grid(image: &RgbImage, output_width: u32) -> Result<SampleGrid> {
    let (src_w, src_h) = image.dimensions();
    if src_w == 0 || src_h == 0 {
        return Err(ChromasciiError::InvalidImage);
    }

    let height = output_height(src_w, src_h, output_width);
    if height == 0 {
        return Err(ChromasciiError::DegenerateOutput);
    }

    let cell_w = src_w as f32 / output_width as f32;
    let cell_h = src_h as f32 / height as f32;

    let mut samples = Vec::with_capacity((output_width * height) as usize);
    for cy in 0..height {
        for cx in 0..output_width {
            let x0 = ((cx as f32 * cell_w) as u32).min(src_w - 1);
            let y0 = ((cy as f32 * cell_h) as u32).min(src_h - 1);
            let x1 = (((cx + 1) as f32 * cell_w).ceil() as u32).clamp(x0 + 1, src_w);
            let y1 = (((cy + 1) as f32 * cell_h).ceil() as u32).clamp(y0 + 1, src_h);

            let mut sum = (0u32, 0u32, 0u32);
            for py in y0..y1 {
                for px in x0..x1 {
                    let p = image.get_pixel(px, py).0;
                    sum.0 += p[0] as u32;
                    sum.1 += p[1] as u32;
                    sum.2 += p[2] as u32;
                }
            }
            let count = (x1 - x0) * (y1 - y0);
            samples.push((
                (sum.0 / count) as u8,
                (sum.1 / count) as u8,
                (sum.2 / count) as u8,
            ));
        }
    }

    Ok(SampleGrid { width: output_width, height, samples })
}
