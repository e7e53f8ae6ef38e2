use std::{fmt::Write as _, io::Write as _, path::Path};

use anyhow::{Context, Result};
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;

use crate::app::{
    dashboard::HtmlDashboard,
    table::{Column, QuoteRow, RowCell},
};

pub const TABLE_ID: &str = "stockTable";
pub const AVERAGE_VALUE_SUM_ID: &str = "averageValueSum";
pub const CURRENT_VALUE_SUM_ID: &str = "currentValueSum";

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn cell_markup(cell: &RowCell) -> String {
    let mut attrs = String::new();
    if let Some(title) = cell.title() {
        let _ = write!(attrs, " title=\"{}\"", escape(title));
    }
    if let Some(indicator) = cell.indicator() {
        let _ = write!(attrs, " style=\"color: {};\"", indicator.css_color());
    }
    format!("<td{}>{}</td>", attrs, escape(cell.text()))
}

pub fn row_markup(row: &QuoteRow) -> String {
    let cells: String = row.cells().iter().map(cell_markup).collect();
    format!("<tr>{}</tr>", cells)
}

pub fn render_page(dashboard: &HtmlDashboard) -> String {
    let header: String = Column::iter()
        .map(|column| format!("<th>{}</th>", escape(&column.to_string())))
        .collect();

    // Everything but the two valuation columns is covered by the label cell.
    let label_span = Column::iter().count() - 2;

    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    page.push_str("<title>Stock Dashboard</title>\n</head>\n<body>\n");
    let _ = writeln!(page, "<table id=\"{}\">", TABLE_ID);
    let _ = writeln!(page, "<thead><tr>{}</tr></thead>", header);
    let _ = writeln!(page, "<tbody>{}</tbody>", dashboard.table_body().inner_html());
    let _ = writeln!(
        page,
        "<tfoot><tr><td colspan=\"{}\">Total</td><td id=\"{}\">{}</td><td id=\"{}\">{}</td></tr></tfoot>",
        label_span,
        AVERAGE_VALUE_SUM_ID,
        escape(dashboard.average_value_sum()),
        CURRENT_VALUE_SUM_ID,
        escape(dashboard.current_value_sum()),
    );
    page.push_str("</table>\n</body>\n</html>\n");
    page
}

/// Replaces `path` with the rendered page; readers never see a half-written file.
pub fn write_page(path: &Path, dashboard: &HtmlDashboard) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    file.write_all(render_page(dashboard).as_bytes())
        .with_context(|| "Failed to write dashboard page")?;
    file.persist(path)
        .with_context(|| format!("Failed to write dashboard page to {}", path.display()))?;

    Ok(())
}
