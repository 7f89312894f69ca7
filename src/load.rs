use std::io::Read;
use std::path::Path;

use crate::error::TableError;
use crate::model::{YieldRecord, YieldSnapshot};

/// Parse records from a JSON string: either a bare array of records or a
/// fetch snapshot object.
pub fn parse_records(json: &str) -> Result<Vec<YieldRecord>, TableError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        return Ok(serde_json::from_value(value)?);
    }

    let snapshot: YieldSnapshot = serde_json::from_value(value)?;
    tracing::debug!(
        source = %snapshot.source,
        fetched_at = %snapshot.fetched_at,
        pools = snapshot.pools.len(),
        "loaded snapshot"
    );
    Ok(snapshot.pools)
}

/// Load records from a JSON file, or from stdin when `path` is `-`.
pub fn load_records(path: &Path) -> Result<Vec<YieldRecord>, TableError> {
    let contents = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    parse_records(&contents)
}
