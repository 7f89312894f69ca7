use unicode_width::UnicodeWidthStr;

use crate::model::SortDirection;
use crate::table::{Align, LoadingPlaceholder, TableView, View};

/// Width of a full placeholder bar, in characters.
const PLACEHOLDER_WIDTH: usize = 48;
const COLUMN_GAP: &str = "  ";

/// Render a view as a fixed-width text table.
pub fn render_ascii(view: &View) -> String {
    match view {
        View::Loading(placeholder) => render_loading(placeholder),
        View::Ready(table) => render_table(table),
    }
}

fn render_loading(placeholder: &LoadingPlaceholder) -> String {
    let mut out = String::new();
    for bar in &placeholder.bars {
        out.push_str(&"░".repeat(bar.of(PLACEHOLDER_WIDTH)));
        out.push('\n');
    }
    out
}

fn render_table(table: &TableView) -> String {
    let header: Vec<String> = table
        .header
        .iter()
        .map(|h| match h.active {
            Some(SortDirection::Ascending) => format!("{} ▲", h.label),
            Some(SortDirection::Descending) => format!("{} ▼", h.label),
            None => h.label.to_string(),
        })
        .collect();

    let body: Vec<Vec<String>> = table
        .rows
        .iter()
        .map(|row| row.cells.iter().map(|c| c.content.plain()).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| display_width(h)).collect();
    for row in &body {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(display_width(cell));
        }
    }

    let aligns: Vec<Align> = table.header.iter().map(|h| h.align).collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths, &aligns);
    let total = widths.iter().sum::<usize>() + COLUMN_GAP.len() * widths.len().saturating_sub(1);
    out.push_str(&"-".repeat(total));
    out.push('\n');
    for row in &body {
        push_line(&mut out, row, &widths, &aligns);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize], aligns: &[Align]) {
    let line = cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, &width), align)| pad(cell, width, *align))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(s)));
    match align {
        Align::Left => format!("{s}{fill}"),
        Align::Right => format!("{fill}{s}"),
    }
}

/// Terminal columns occupied by `s`; CJK and emoji take two.
fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}
