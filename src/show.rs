use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::load::load_records;
use crate::model::{SortDirection, SortKey, SortState};
use crate::render::{self, OutputFormat};
use crate::table::YieldTable;

/// Options for the `show` command.
pub struct ShowConfig {
    pub file: PathBuf,
    pub sort: Option<SortKey>,
    pub direction: Option<SortDirection>,
    /// Header activations applied in order after the initial state.
    pub clicks: Vec<SortKey>,
    pub loading: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Entry point for the `show` command.
pub fn run(config: &ShowConfig) -> Result<()> {
    let data = load_records(&config.file)
        .with_context(|| format!("loading records from {}", config.file.display()))?;

    let mut table = YieldTable::with_state(initial_state(config.sort, config.direction));
    for &key in &config.clicks {
        table.request_sort(key);
    }

    let out = render::render(&table, &data, config.loading, config.format)?;
    match &config.output {
        Some(path) => std::fs::write(path, out)
            .with_context(|| format!("writing {} output to {}", config.format, path.display()))?,
        None => print!("{out}"),
    }
    Ok(())
}

/// Starting sort state: the default, with `sort`/`direction` overrides.
///
/// A key given without a direction starts ascending, matching a first
/// click on that header.
pub fn initial_state(sort: Option<SortKey>, direction: Option<SortDirection>) -> SortState {
    let mut state = SortState::default();
    if let Some(key) = sort {
        if key != state.key {
            state = SortState::new(key, SortDirection::Ascending);
        }
    }
    if let Some(direction) = direction {
        state.direction = direction;
    }
    state
}
