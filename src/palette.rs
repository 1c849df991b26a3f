//! Fixed terminal color palette used as nearest-neighbor targets.

use serde::Deserialize;

/// Restores default terminal rendering state.
pub const RESET: &str = "\x1b[0m";

/// Identifier for one palette color.
///
/// Discriminants index [`PALETTE`]. Table order is fixed, so nearest-color
/// ties always resolve to the earlier entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnsiColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    Orange,
    Pink,
    Violet,
    Turquoise,
    Aqua,
    Salmon,
    Lime,
    Peach,
    Brown,
    Gold,
    DarkRed,
    DarkGreen,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
    DarkGray,
    LightGray,
    SlateGray,
    SkyBlue,
    Lavender,
    Mint,
    Indigo,
    Coral,
    Ivory,
    Navy,
    Teal,
    Rose,
    Sand,
    Charcoal,
    Beige,
    Olive,
    Maroon,
    Plum,
    Fuchsia,
    Periwinkle,
}

/// One (identifier, display code, reference color) triple.
pub struct PaletteEntry {
    pub name: AnsiColor,
    pub code: &'static str,
    pub rgb: (u8, u8, u8),
}

/// The full palette, in matching priority order.
///
/// The 16 standard/bright colors use SGR 30-37/90-97; the rest are 256-color
/// `38;5;N` sequences. Reference colors are the conventional RGB values for
/// each name, not what any particular terminal theme displays.
pub static PALETTE: [PaletteEntry; 51] = [
    PaletteEntry { name: AnsiColor::Black, code: "\x1b[30m", rgb: (0, 0, 0) },
    PaletteEntry { name: AnsiColor::Red, code: "\x1b[31m", rgb: (255, 0, 0) },
    PaletteEntry { name: AnsiColor::Green, code: "\x1b[32m", rgb: (0, 255, 0) },
    PaletteEntry { name: AnsiColor::Yellow, code: "\x1b[33m", rgb: (255, 255, 0) },
    PaletteEntry { name: AnsiColor::Blue, code: "\x1b[34m", rgb: (0, 0, 255) },
    PaletteEntry { name: AnsiColor::Magenta, code: "\x1b[35m", rgb: (255, 0, 255) },
    PaletteEntry { name: AnsiColor::Cyan, code: "\x1b[36m", rgb: (0, 255, 255) },
    PaletteEntry { name: AnsiColor::White, code: "\x1b[37m", rgb: (192, 192, 192) },
    PaletteEntry { name: AnsiColor::BrightBlack, code: "\x1b[90m", rgb: (105, 105, 105) },
    PaletteEntry { name: AnsiColor::BrightRed, code: "\x1b[91m", rgb: (255, 85, 85) },
    PaletteEntry { name: AnsiColor::BrightGreen, code: "\x1b[92m", rgb: (85, 255, 85) },
    PaletteEntry { name: AnsiColor::BrightYellow, code: "\x1b[93m", rgb: (255, 255, 85) },
    PaletteEntry { name: AnsiColor::BrightBlue, code: "\x1b[94m", rgb: (85, 85, 255) },
    PaletteEntry { name: AnsiColor::BrightMagenta, code: "\x1b[95m", rgb: (255, 85, 255) },
    PaletteEntry { name: AnsiColor::BrightCyan, code: "\x1b[96m", rgb: (85, 255, 255) },
    PaletteEntry { name: AnsiColor::BrightWhite, code: "\x1b[97m", rgb: (255, 255, 255) },
    PaletteEntry { name: AnsiColor::Orange, code: "\x1b[38;5;208m", rgb: (255, 165, 0) },
    PaletteEntry { name: AnsiColor::Pink, code: "\x1b[38;5;213m", rgb: (255, 192, 203) },
    PaletteEntry { name: AnsiColor::Violet, code: "\x1b[38;5;177m", rgb: (238, 130, 238) },
    PaletteEntry { name: AnsiColor::Turquoise, code: "\x1b[38;5;80m", rgb: (64, 224, 208) },
    PaletteEntry { name: AnsiColor::Aqua, code: "\x1b[38;5;87m", rgb: (0, 255, 255) },
    PaletteEntry { name: AnsiColor::Salmon, code: "\x1b[38;5;216m", rgb: (250, 128, 114) },
    PaletteEntry { name: AnsiColor::Lime, code: "\x1b[38;5;154m", rgb: (191, 255, 0) },
    PaletteEntry { name: AnsiColor::Peach, code: "\x1b[38;5;223m", rgb: (255, 218, 185) },
    PaletteEntry { name: AnsiColor::Brown, code: "\x1b[38;5;94m", rgb: (139, 69, 19) },
    PaletteEntry { name: AnsiColor::Gold, code: "\x1b[38;5;220m", rgb: (255, 215, 0) },
    PaletteEntry { name: AnsiColor::DarkRed, code: "\x1b[38;5;88m", rgb: (139, 0, 0) },
    PaletteEntry { name: AnsiColor::DarkGreen, code: "\x1b[38;5;22m", rgb: (0, 100, 0) },
    PaletteEntry { name: AnsiColor::DarkBlue, code: "\x1b[38;5;18m", rgb: (0, 0, 139) },
    PaletteEntry { name: AnsiColor::DarkMagenta, code: "\x1b[38;5;89m", rgb: (139, 0, 139) },
    PaletteEntry { name: AnsiColor::DarkCyan, code: "\x1b[38;5;30m", rgb: (0, 139, 139) },
    PaletteEntry { name: AnsiColor::DarkGray, code: "\x1b[38;5;236m", rgb: (64, 64, 64) },
    PaletteEntry { name: AnsiColor::LightGray, code: "\x1b[38;5;250m", rgb: (211, 211, 211) },
    PaletteEntry { name: AnsiColor::SlateGray, code: "\x1b[38;5;66m", rgb: (112, 128, 144) },
    PaletteEntry { name: AnsiColor::SkyBlue, code: "\x1b[38;5;117m", rgb: (135, 206, 235) },
    PaletteEntry { name: AnsiColor::Lavender, code: "\x1b[38;5;183m", rgb: (230, 230, 250) },
    PaletteEntry { name: AnsiColor::Mint, code: "\x1b[38;5;121m", rgb: (189, 252, 201) },
    PaletteEntry { name: AnsiColor::Indigo, code: "\x1b[38;5;54m", rgb: (75, 0, 130) },
    PaletteEntry { name: AnsiColor::Coral, code: "\x1b[38;5;209m", rgb: (255, 127, 80) },
    PaletteEntry { name: AnsiColor::Ivory, code: "\x1b[38;5;230m", rgb: (255, 255, 240) },
    PaletteEntry { name: AnsiColor::Navy, code: "\x1b[38;5;17m", rgb: (0, 0, 128) },
    PaletteEntry { name: AnsiColor::Teal, code: "\x1b[38;5;37m", rgb: (0, 128, 128) },
    PaletteEntry { name: AnsiColor::Rose, code: "\x1b[38;5;211m", rgb: (255, 228, 225) },
    PaletteEntry { name: AnsiColor::Sand, code: "\x1b[38;5;180m", rgb: (244, 164, 96) },
    PaletteEntry { name: AnsiColor::Charcoal, code: "\x1b[38;5;240m", rgb: (54, 69, 79) },
    PaletteEntry { name: AnsiColor::Beige, code: "\x1b[38;5;223m", rgb: (245, 245, 220) },
    PaletteEntry { name: AnsiColor::Olive, code: "\x1b[38;5;58m", rgb: (128, 128, 0) },
    PaletteEntry { name: AnsiColor::Maroon, code: "\x1b[38;5;52m", rgb: (128, 0, 0) },
    PaletteEntry { name: AnsiColor::Plum, code: "\x1b[38;5;176m", rgb: (221, 160, 221) },
    PaletteEntry { name: AnsiColor::Fuchsia, code: "\x1b[38;5;201m", rgb: (255, 0, 255) },
    PaletteEntry { name: AnsiColor::Periwinkle, code: "\x1b[38;5;147m", rgb: (204, 204, 255) },
];

impl AnsiColor {
    pub fn entry(self) -> &'static PaletteEntry {
        &PALETTE[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.entry().code
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        self.entry().rgb
    }
}
