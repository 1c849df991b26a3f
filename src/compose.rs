//! Assembles output lines from rendered cells and the overlay panel.

use serde::Deserialize;

use crate::matcher::RenderedCell;
use crate::palette::{AnsiColor, RESET};

/// Rows at the bottom of the output that never carry overlay text.
pub(crate) const OVERLAY_BOTTOM_MARGIN: usize = 5;

/// One labeled name/value pair rendered beside the art.
#[derive(Debug, Clone, Deserialize)]
pub struct OverlayEntry {
    pub name: String,
    pub name_color: AnsiColor,
    pub value: String,
    pub value_color: AnsiColor,
}

/// Layout parameters for one compose pass.
pub struct ComposeConfig<'a> {
    pub margin_width: usize,
    pub overlay_start_row: usize,
    pub overlay: &'a [OverlayEntry],
}

/// Build one printable line per grid row.
///
/// Each cell contributes `{code}{glyph}{reset}`; after the right margin,
/// rows inside the overlay window carry one entry each, positionally:
/// entry i lands on row `overlay_start_row + i`. Overlay text is appended
/// verbatim, never wrapped or truncated.
pub fn compose_lines(cells: &[RenderedCell], width: u32, cfg: &ComposeConfig) -> Vec<String> {
    let width = width as usize;
    let height = cells.len() / width;
    // The window keeps a fixed bottom margin; for short outputs it is empty
    // and no overlay is emitted at all.
    let overlay_window_end = height.saturating_sub(OVERLAY_BOTTOM_MARGIN);

    let mut lines = Vec::with_capacity(height);
    for r in 0..height {
        let mut line = String::new();
        for cell in &cells[r * width..(r + 1) * width] {
            line.push_str(cell.code.unwrap_or(""));
            line.push(cell.glyph);
            line.push_str(RESET);
        }

        line.push_str(&" ".repeat(cfg.margin_width));

        if (cfg.overlay_start_row..overlay_window_end).contains(&r) {
            if let Some(entry) = cfg.overlay.get(r - cfg.overlay_start_row) {
                line.push_str(&format!(
                    "{}{}:{} {}{}{}",
                    entry.name_color.code(),
                    entry.name,
                    RESET,
                    entry.value_color.code(),
                    entry.value,
                    RESET
                ));
            }
        }

        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blank_cells(width: usize, height: usize) -> Vec<RenderedCell> {
        vec![RenderedCell { code: None, glyph: ' ' }; width * height]
    }

    fn entry(name: &str, value: &str) -> OverlayEntry {
        OverlayEntry {
            name: name.into(),
            name_color: AnsiColor::Red,
            value: value.into(),
            value_color: AnsiColor::White,
        }
    }

    fn cfg<'a>(start: usize, overlay: &'a [OverlayEntry]) -> ComposeConfig<'a> {
        ComposeConfig { margin_width: 2, overlay_start_row: start, overlay }
    }

    #[test]
    fn emits_one_line_per_row() {
        let lines = compose_lines(&blank_cells(3, 7), 3, &cfg(0, &[]));
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn cells_render_code_glyph_reset() {
        let cells = [
            RenderedCell { code: Some("\x1b[31m"), glyph: '#' },
            RenderedCell { code: None, glyph: ' ' },
        ];
        let cfg = ComposeConfig { margin_width: 3, overlay_start_row: 0, overlay: &[] };
        let lines = compose_lines(&cells, 2, &cfg);
        assert_eq!(lines, vec!["\x1b[31m#\x1b[0m \x1b[0m   ".to_string()]);
    }

    #[test]
    fn overlay_entries_land_on_consecutive_rows() {
        let overlay = [entry("a", "1"), entry("b", "2"), entry("c", "3")];
        let lines = compose_lines(&blank_cells(1, 20), 1, &cfg(2, &overlay));

        // window is 2..15; entries occupy rows 2, 3, 4
        assert!(lines[2].contains("a:"));
        assert!(lines[3].contains("b:"));
        assert!(lines[4].contains("c:"));
        for (r, line) in lines.iter().enumerate() {
            if !(2..5).contains(&r) {
                assert_eq!(line, &format!(" {}  ", RESET), "row {r} should be art only");
            }
        }
    }

    #[test]
    fn entry_format_colors_name_and_value_independently() {
        let overlay = [entry("Status", "Ready")];
        let lines = compose_lines(&blank_cells(1, 10), 1, &cfg(0, &overlay));
        assert!(lines[0].ends_with("\x1b[31mStatus:\x1b[0m \x1b[37mReady\x1b[0m"));
    }

    #[test]
    fn short_output_has_an_empty_overlay_window() {
        // height 4, start 4: window end saturates to 0, nothing is emitted
        let overlay = [entry("a", "1")];
        let lines = compose_lines(&blank_cells(1, 4), 1, &cfg(4, &overlay));
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| !l.contains("a:")));
    }

    #[test]
    fn extra_entries_beyond_the_window_are_dropped() {
        // height 8: window is 1..3, room for two of the four entries
        let overlay = [entry("a", "1"), entry("b", "2"), entry("c", "3"), entry("d", "4")];
        let lines = compose_lines(&blank_cells(1, 8), 1, &cfg(1, &overlay));
        assert!(lines[1].contains("a:"));
        assert!(lines[2].contains("b:"));
        assert!(lines.iter().all(|l| !l.contains("c:") && !l.contains("d:")));
    }

    #[test]
    fn overlay_text_is_never_truncated() {
        let long = "x".repeat(400);
        let overlay = [entry("key", &long)];
        let lines = compose_lines(&blank_cells(1, 10), 1, &cfg(0, &overlay));
        assert!(lines[0].contains(&long));
    }
}
