//! HTML/SVG rendering of the week grid.
//!
//! Emits a `grid-container` block with one `grid-canvas` child per visible
//! day: a `v-index` day-number label and an SVG drawing surface with a
//! fixed view box, one `rect` per block. Rect classes carry the
//! correlation id and the sector so a stylesheet can color by either.

use std::fmt::Write as _;

use chrono::Datelike;

use wt_core::DayRow;

const VIEW_BOX: &str = "-2 1 724 23";

/// Renders the day rows as the grid document.
pub fn render_grid(rows: &[DayRow]) -> String {
    let mut out = String::new();
    out.push_str("<div id=\"grid-container\">\n");
    for row in rows {
        let date_id = format!("{}-{}-{}", row.date.year(), row.date.month(), row.date.day());
        writeln!(out, "  <div class=\"grid-canvas\">").unwrap();
        writeln!(out, "    <div class=\"v-index\">{}</div>", row.day_of_month).unwrap();
        writeln!(
            out,
            "    <svg id=\"{date_id}\" class=\"day\" viewBox=\"{VIEW_BOX}\" xmlns=\"http://www.w3.org/2000/svg\">"
        )
        .unwrap();
        for block in &row.blocks {
            writeln!(
                out,
                "      <rect class=\"{} {} task\" shape-rendering=\"geometricPrecision\" taskName=\"{}\" x=\"{}\" width=\"{}\" height=\"{}\" />",
                block.task_id,
                escape(block.sector.as_str()),
                escape(block.task_name.as_str()),
                block.offset,
                block.width,
                block.height
            )
            .unwrap();
        }
        writeln!(out, "    </svg>").unwrap();
        writeln!(out, "  </div>").unwrap();
    }
    out.push_str("</div>\n");
    out
}

/// Minimal XML attribute escaping.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
