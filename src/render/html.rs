use std::fmt::Write;

use crate::model::SortDirection;
use crate::table::{Align, BarWidth, CellContent, LoadingPlaceholder, TableView, View};

/// Render a view as an HTML fragment: a card wrapping either the
/// placeholder bars or a `<table>`.
///
/// Sortable headers carry `data-sort-key` so a host page can wire clicks
/// back to `request_sort`.
pub fn render_html(view: &View) -> String {
    match view {
        View::Loading(placeholder) => render_loading(placeholder),
        View::Ready(table) => render_table(table),
    }
}

fn render_loading(placeholder: &LoadingPlaceholder) -> String {
    let mut out = String::from("<div class=\"yield-card yield-loading\">\n<div class=\"space-y-3\">\n");
    for bar in &placeholder.bars {
        let width = match bar {
            BarWidth::Full => "w-full",
            BarWidth::FiveSixths => "w-5/6",
        };
        let _ = writeln!(out, "<div class=\"placeholder-bar animate-pulse {width}\"></div>");
    }
    out.push_str("</div>\n</div>\n");
    out
}

fn render_table(table: &TableView) -> String {
    let mut out = String::from("<div class=\"yield-card\">\n<table class=\"yield-table\">\n<thead>\n<tr>\n");

    for h in &table.header {
        let mut classes = vec![align_class(h.align)];
        let mut attrs = String::new();
        if let Some(key) = h.sort_key {
            classes.push("sortable");
            let _ = write!(attrs, " data-sort-key=\"{key}\"");
        }
        if let Some(direction) = h.active {
            let aria = match direction {
                SortDirection::Ascending => "ascending",
                SortDirection::Descending => "descending",
            };
            let _ = write!(attrs, " aria-sort=\"{aria}\"");
        }
        let _ = writeln!(
            out,
            "<th class=\"{}\"{attrs}>{}</th>",
            classes.join(" "),
            escape(h.label)
        );
    }
    out.push_str("</tr>\n</thead>\n<tbody>\n");

    for row in &table.rows {
        let _ = writeln!(out, "<tr data-key=\"{}\">", escape(&row.key));
        for cell in &row.cells {
            let inner = match &cell.content {
                CellContent::Text(s) => escape(s),
                CellContent::Pills(tokens) => tokens
                    .iter()
                    .map(|t| format!("<span class=\"pill\">{}</span>", escape(t)))
                    .collect::<Vec<_>>()
                    .join(""),
            };
            let _ = writeln!(out, "<td class=\"{}\">{inner}</td>", align_class(cell.align));
        }
        out.push_str("</tr>\n");
    }

    out.push_str("</tbody>\n</table>\n</div>\n");
    out
}

fn align_class(align: Align) -> &'static str {
    match align {
        Align::Left => "text-left",
        Align::Right => "text-right",
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
