
use std::path::{Path, PathBuf};

use yield_table::model::SortKey;
use yield_table::render::OutputFormat;
use yield_table::show::{self, ShowConfig};

use table_common::*;

// ── Helpers ──────────────────────────────────────────────────────────

fn write_fixture(dir: &Path) -> PathBuf {
    let data = vec![
        record("small", "Ethereum", 4.0, 100.0),
        record("large", "Base", 2.0, 900.0),
    ];
    let path = dir.join("pools.json");
    std::fs::write(&path, serde_json::to_string(&data).unwrap()).unwrap();
    path
}

fn config(file: PathBuf, output: PathBuf) -> ShowConfig {
    ShowConfig {
        file,
        sort: None,
        direction: None,
        clicks: Vec::new(),
        loading: false,
        format: OutputFormat::Ascii,
        output: Some(output),
    }
}

fn row_order(text: &str) -> Vec<&str> {
    text.lines()
        .skip(2)
        .filter_map(|l| l.split_whitespace().next())
        .collect()
}

// ── Tests ────────────────────────────────────────────────────────────

#[test]
fn test_show_default_is_tvl_descending() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.txt");
    show::run(&config(write_fixture(dir.path()), out.clone())).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("TVL ▼"));
    assert_eq!(row_order(&text), vec!["large", "small"]);
}

#[test]
fn test_show_applies_clicks_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_fixture(dir.path());
    let out = dir.path().join("table.txt");

    let cfg = ShowConfig {
        clicks: vec![SortKey::Tvl],
        ..config(file.clone(), out.clone())
    };
    show::run(&cfg).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("TVL ▲"));
    assert_eq!(row_order(&text), vec!["small", "large"]);

    // apy ascending, then flipped to descending
    let cfg = ShowConfig {
        clicks: vec![SortKey::Apy, SortKey::Apy],
        ..config(file, out.clone())
    };
    show::run(&cfg).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.contains("APY ▼"));
    assert_eq!(row_order(&text), vec!["small", "large"]);
}

#[test]
fn test_show_loading_writes_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("table.html");
    let cfg = ShowConfig {
        loading: true,
        format: OutputFormat::Html,
        ..config(write_fixture(dir.path()), out.clone())
    };
    show::run(&cfg).unwrap();

    let html = std::fs::read_to_string(&out).unwrap();
    assert_eq!(html.matches("placeholder-bar").count(), 3);
    assert!(!html.contains("large"));
}

#[test]
fn test_show_missing_input_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path().join("absent.json"), dir.path().join("out.txt"));
    let err = show::run(&cfg).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
    assert!(!dir.path().join("out.txt").exists());
}
