pub mod record;
pub mod sort;

pub use record::{YieldRecord, YieldSnapshot};
pub use sort::{SortDirection, SortKey, SortState};
