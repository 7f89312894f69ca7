use schemars::schema_for;

use crate::model::YieldSnapshot;

/// JSON Schema for `YieldSnapshot`, pretty-printed, or `{"error": ...}` if
/// it cannot be serialized.
pub fn get_schema_json() -> String {
    let schema = schema_for!(YieldSnapshot);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Serialization error: {e}") }).to_string()
    })
}

/// Print the JSON Schema for `YieldSnapshot`.
pub fn run() -> anyhow::Result<()> {
    println!("{}", get_schema_json());
    Ok(())
}
