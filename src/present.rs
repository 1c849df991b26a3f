//! Writes composed lines to an output stream.

use std::io::Write;

use crate::palette::RESET;

/// Write each line in order, then one trailing reset line so the terminal
/// never stays colored. The first write failure aborts remaining output.
pub fn present<W: Write>(lines: &[String], out: &mut W) -> std::io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{RESET}")?;
    out.flush()
}
