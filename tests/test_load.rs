use std::io::Write;

use yield_table::example::sample_records;
use yield_table::load::{load_records, parse_records};
use yield_table::{TableError, YieldSnapshot};

// ── Input shapes ─────────────────────────────────────────────────────

#[test]
fn test_parse_bare_array() {
    let json = r#"[
        {"protocol": "A", "chain": "Ethereum", "apy": 0.05, "tvl": 100,
         "pool": "USDC", "rewardTokens": ["COMP"]},
        {"protocol": "B", "chain": "Base", "apy": 0.03, "tvl": 200, "pool": "WETH"}
    ]"#;
    let records = parse_records(json).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].reward_tokens, vec!["COMP"]);
    // rewardTokens is optional
    assert!(records[1].reward_tokens.is_empty());
    assert_eq!(records[1].tvl, 200.0);
}

#[test]
fn test_parse_snapshot() {
    let snapshot = YieldSnapshot {
        fetched_at: "2026-10-16T12:00:00+00:00".into(),
        source: "defillama".into(),
        pools: sample_records(),
    };
    let json = serde_json::to_string(&snapshot).unwrap();
    assert_eq!(parse_records(&json).unwrap(), sample_records());
}

#[test]
fn test_parse_rejects_bad_input() {
    assert!(matches!(parse_records("{not json"), Err(TableError::Json(_))));
    // apy must be numeric
    let json = r#"[{"protocol": "A", "chain": "X", "apy": "high", "tvl": 1, "pool": "P"}]"#;
    assert!(parse_records(json).is_err());
}

#[test]
fn test_parse_reports_field_errors() {
    let json = r#"[{"protocol": "A", "chain": "X", "apy": "high", "tvl": 1, "pool": "P"}]"#;
    let msg = parse_records(json).unwrap_err().to_string();
    assert!(msg.contains("invalid type"), "got: {msg}");
    assert!(msg.contains("high"), "got: {msg}");

    let json = r#"{"fetched_at": "2026-10-16T12:00:00Z", "source": "defillama"}"#;
    let msg = parse_records(json).unwrap_err().to_string();
    assert!(msg.contains("missing field `pools`"), "got: {msg}");
}

// ── Files ────────────────────────────────────────────────────────────

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string_pretty(&sample_records()).unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let records = load_records(file.path()).unwrap();
    assert_eq!(records, sample_records());
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_records(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, TableError::Io(_)));
}
