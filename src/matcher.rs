//! Maps RGB samples to the nearest palette color, or blank when too dark.

use crate::palette::{PaletteEntry, PALETTE};

/// Pixels below this BT.601 brightness render as background.
const BLANK_THRESHOLD: u32 = 30;

/// What gets printed for one grid cell.
///
/// `code` is `None` for blank cells; the glyph is then a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedCell {
    pub code: Option<&'static str>,
    pub glyph: char,
}

/// Integer BT.601 luminance, 0-255.
fn brightness((r, g, b): (u8, u8, u8)) -> u32 {
    (299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000
}

fn distance_sq((r, g, b): (u8, u8, u8), (cr, cg, cb): (u8, u8, u8)) -> i32 {
    let dr = r as i32 - cr as i32;
    let dg = g as i32 - cg as i32;
    let db = b as i32 - cb as i32;
    dr * dr + dg * dg + db * db
}

/// Closest palette entry by squared RGB distance. Ties go to the earlier
/// table entry.
pub fn nearest_color(sample: (u8, u8, u8)) -> &'static PaletteEntry {
    let mut best = &PALETTE[0];
    let mut best_dist = distance_sq(sample, best.rgb);
    for entry in &PALETTE[1..] {
        let dist = distance_sq(sample, entry.rgb);
        if dist < best_dist {
            best = entry;
            best_dist = dist;
        }
    }
    best
}

/// Resolve one sample to a cell: blank if too dark, otherwise the nearest
/// palette color with the configured glyph.
pub fn match_sample(sample: (u8, u8, u8), glyph: char) -> RenderedCell {
    if brightness(sample) < BLANK_THRESHOLD {
        return RenderedCell { code: None, glyph: ' ' };
    }
    RenderedCell { code: Some(nearest_color(sample).code), glyph }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::AnsiColor;

    #[test]
    fn dark_samples_are_blank_regardless_of_hue() {
        for sample in [(0, 0, 0), (29, 29, 29), (0, 0, 255), (90, 0, 0)] {
            assert!(brightness(sample) < BLANK_THRESHOLD);
            let cell = match_sample(sample, '#');
            assert_eq!(cell, RenderedCell { code: None, glyph: ' ' });
        }
    }

    #[test]
    fn bright_samples_get_a_palette_code() {
        for sample in [(30, 30, 30), (255, 0, 0), (250, 250, 250), (12, 200, 40)] {
            assert!(brightness(sample) >= BLANK_THRESHOLD);
            let cell = match_sample(sample, '#');
            assert_eq!(cell.glyph, '#');
            let code = cell.code.expect("bright sample must be colored");
            assert!(PALETTE.iter().any(|e| e.code == code));
        }
    }

    #[test]
    fn exact_palette_colors_match_themselves() {
        assert_eq!(nearest_color((255, 0, 0)).name, AnsiColor::Red);
        assert_eq!(nearest_color((0, 0, 255)).name, AnsiColor::Blue);
        assert_eq!(nearest_color((255, 165, 0)).name, AnsiColor::Orange);
    }

    #[test]
    fn near_white_prefers_bright_white() {
        assert_eq!(nearest_color((250, 250, 250)).name, AnsiColor::BrightWhite);
    }

    #[test]
    fn result_is_no_farther_than_any_entry() {
        let samples = [
            (0, 0, 0),
            (255, 255, 255),
            (127, 127, 127),
            (200, 30, 90),
            (17, 230, 100),
            (80, 80, 255),
            (250, 250, 250),
            (139, 69, 19),
        ];
        for sample in samples {
            let best = nearest_color(sample);
            let best_dist = distance_sq(sample, best.rgb);
            for entry in &PALETTE {
                assert!(
                    best_dist <= distance_sq(sample, entry.rgb),
                    "{:?} beaten by {:?} for sample {:?}",
                    best.name,
                    entry.name,
                    sample
                );
            }
        }
    }

    #[test]
    fn ties_resolve_to_the_earlier_entry() {
        // CYAN (index 6) and AQUA (index 20) share (0, 255, 255).
        assert_eq!(nearest_color((0, 255, 255)).name, AnsiColor::Cyan);
    }

    #[test]
    fn matching_is_idempotent() {
        let sample = (123, 45, 210);
        assert_eq!(match_sample(sample, '#'), match_sample(sample, '#'));
    }
}
