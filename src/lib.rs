pub mod browse;
pub mod config;
pub mod error;
pub mod example;
pub mod format;
pub mod load;
pub mod model;
pub mod render;
pub mod schema;
pub mod show;
pub mod table;

#[cfg(feature = "full")]
pub mod fetch_data;
#[cfg(feature = "full")]
pub mod logging;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::TableError;
pub use model::{SortDirection, SortKey, SortState, YieldRecord, YieldSnapshot};
pub use table::{View, YieldTable};
