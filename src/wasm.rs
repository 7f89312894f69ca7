use wasm_bindgen::prelude::*;

use crate::load::parse_records;
use crate::model::{SortDirection, SortKey, SortState, YieldRecord};
use crate::render::render_html;
use crate::table::{YieldTable, sorted_records};

fn error_json(msg: impl std::fmt::Display) -> String {
    serde_json::json!({ "error": msg.to_string() }).to_string()
}

fn parse_state(sort_key: &str, direction: &str) -> Result<SortState, String> {
    let key: SortKey = sort_key.parse().map_err(|e| format!("{e}"))?;
    let direction: SortDirection = direction.parse().map_err(|e| format!("{e}"))?;
    Ok(SortState::new(key, direction))
}

/// Render the table as HTML. Returns `{"error": ...}` JSON on bad input.
#[wasm_bindgen]
pub fn render_yield_table_html(json: &str, sort_key: &str, direction: &str, is_loading: bool) -> String {
    let state = match parse_state(sort_key, direction) {
        Ok(s) => s,
        Err(e) => return error_json(e),
    };
    // Loading ignores the payload entirely
    let data = if is_loading {
        Vec::new()
    } else {
        match parse_records(json) {
            Ok(d) => d,
            Err(e) => return error_json(e),
        }
    };
    render_html(&YieldTable::with_state(state).render(&data, is_loading))
}

/// Apply a header click to `(sort_key, direction)`; returns the new state
/// as `{"key": ..., "direction": ...}`.
#[wasm_bindgen]
pub fn next_sort_state(sort_key: &str, direction: &str, clicked: &str) -> String {
    let mut state = match parse_state(sort_key, direction) {
        Ok(s) => s,
        Err(e) => return error_json(e),
    };
    match clicked.parse::<SortKey>() {
        Ok(key) => state.request_sort(key),
        Err(e) => return error_json(e),
    }
    serde_json::to_string(&state).unwrap_or_else(error_json)
}

/// Sort an array of records passed as a JS value.
#[wasm_bindgen]
pub fn sort_yield_records(data: JsValue, sort_key: &str, direction: &str) -> Result<JsValue, JsValue> {
    let state = parse_state(sort_key, direction).map_err(|e| JsValue::from_str(&e))?;
    let records: Vec<YieldRecord> = serde_wasm_bindgen::from_value(data)?;
    Ok(serde_wasm_bindgen::to_value(&sorted_records(&records, &state))?)
}

#[wasm_bindgen]
pub fn get_schema() -> String {
    crate::schema::get_schema_json()
}
