use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[cfg(feature = "full")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown sort key `{value}` (expected protocol, chain, apy or tvl)")]
    UnknownSortKey { value: String },

    #[error("Unknown sort direction `{value}` (expected asc or desc)")]
    UnknownDirection { value: String },

    #[error("Unknown output format `{value}` (expected ascii, html, csv or json)")]
    UnknownFormat { value: String },
}
