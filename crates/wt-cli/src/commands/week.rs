//! Week command: render the trailing days as per-day blocks.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use wt_core::{WindowError, chunk_log, layout_week, trailing_window};
use wt_store::Store;

use crate::config::Config;
use crate::{render, svg};

/// Chunks the log, selects the trailing window, and renders it.
///
/// The default renderer draws the grid in the terminal; `--json` emits the
/// layout structure instead, and `--svg` writes the HTML/SVG grid document
/// to a file.
pub fn run<W: Write>(
    writer: &mut W,
    store: &Store,
    config: &Config,
    days: u32,
    json: bool,
    svg_path: Option<&Path>,
) -> Result<()> {
    let log = store.load_log().context("failed to load event log")?;
    let segments = chunk_log(&log).context("failed to chunk event log")?;

    let visible = match trailing_window(&segments, days) {
        Ok(visible) => visible,
        Err(WindowError::EmptyLog) => {
            writeln!(writer, "Nothing to display: no completed events recorded yet.")?;
            return Ok(());
        }
    };

    let rows = layout_week(&visible, &config.layout());

    if json {
        serde_json::to_writer_pretty(&mut *writer, &rows)
            .context("failed to serialize layout")?;
        writeln!(writer)?;
    } else if let Some(path) = svg_path {
        std::fs::write(path, svg::render_grid(&rows))
            .with_context(|| format!("failed to write {}", path.display()))?;
        writeln!(writer, "Wrote {} day rows to {}", rows.len(), path.display())?;
    } else {
        render::render_week(writer, &rows, config.pixels_per_hour)?;
    }
    Ok(())
}
