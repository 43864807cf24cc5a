//! Terminal rendering of the week grid.
//!
//! Each visible day becomes one row: a day-of-month label and a 24-hour
//! strip of cells, three per hour. Blocks fill their cells with a glyph
//! assigned per sector, listed in a legend under the grid.

use std::io::Write;

use anyhow::Result;

use wt_core::DayRow;

const CELLS_PER_HOUR: usize = 3;
const DAY_CELLS: usize = 24 * CELLS_PER_HOUR;
const GLYPHS: [char; 5] = ['█', '▓', '▒', '░', '▚'];

/// Draws the day rows followed by the sector legend.
pub fn render_week<W: Write>(
    writer: &mut W,
    rows: &[DayRow],
    pixels_per_hour: f64,
) -> Result<()> {
    let mut sectors: Vec<String> = Vec::new();

    for row in rows {
        let mut cells = vec!['·'; DAY_CELLS];
        for block in &row.blocks {
            let glyph = sector_glyph(&mut sectors, block.sector.as_str());
            let start = cell_index(block.offset, pixels_per_hour).min(DAY_CELLS - 1);
            let end = cell_index(block.offset + block.width, pixels_per_hour)
                .clamp(start + 1, DAY_CELLS);
            for cell in &mut cells[start..end] {
                *cell = glyph;
            }
        }
        let strip: String = cells.iter().collect();
        writeln!(writer, "{:>2} │{strip}│", row.day_of_month)?;
    }

    if !sectors.is_empty() {
        let legend: Vec<String> = sectors
            .iter()
            .enumerate()
            .map(|(index, sector)| format!("{} {sector}", GLYPHS[index % GLYPHS.len()]))
            .collect();
        writeln!(writer, "   {}", legend.join("  "))?;
    }
    Ok(())
}

/// Glyph for a sector, assigned in order of first appearance.
fn sector_glyph(sectors: &mut Vec<String>, sector: &str) -> char {
    let index = match sectors.iter().position(|known| known == sector) {
        Some(index) => index,
        None => {
            sectors.push(sector.to_string());
            sectors.len() - 1
        }
    };
    GLYPHS[index % GLYPHS.len()]
}

/// Converts a pixel position to a cell index on the 24-hour strip.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn cell_index(pixels: f64, pixels_per_hour: f64) -> usize {
    let hours = pixels / pixels_per_hour;
    (hours * CELLS_PER_HOUR as f64).round().max(0.0) as usize
}
