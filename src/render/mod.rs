pub mod ascii;
#[cfg(feature = "full")]
pub mod csv;
pub mod html;

use std::fmt;
use std::str::FromStr;

use crate::error::TableError;
use crate::model::YieldRecord;
use crate::table::YieldTable;

pub use ascii::render_ascii;
pub use html::render_html;

/// Concrete markup a table can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Ascii,
    Html,
    #[cfg(feature = "full")]
    Csv,
    /// The view model itself, serialized.
    Json,
}

impl FromStr for OutputFormat {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ascii" | "text" => Ok(OutputFormat::Ascii),
            "html" => Ok(OutputFormat::Html),
            #[cfg(feature = "full")]
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(TableError::UnknownFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Ascii => "ascii",
            OutputFormat::Html => "html",
            #[cfg(feature = "full")]
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

/// Render one pass of `table` over `data` in the requested format.
///
/// CSV is a data export: while loading it contains the header row only.
pub fn render(
    table: &YieldTable,
    data: &[YieldRecord],
    is_loading: bool,
    format: OutputFormat,
) -> Result<String, TableError> {
    match format {
        OutputFormat::Ascii => Ok(render_ascii(&table.render(data, is_loading))),
        OutputFormat::Html => Ok(render_html(&table.render(data, is_loading))),
        #[cfg(feature = "full")]
        OutputFormat::Csv => {
            let rows = if is_loading { Vec::new() } else { table.sorted(data) };
            self::csv::render_csv(&rows)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&table.render(data, is_loading))?),
    }
}
