pub mod defillama;
mod types;

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::FetchConfig;
use crate::model::YieldSnapshot;

/// Run the fetch command: download pools, filter them, write a snapshot.
///
/// Writes to `output` when given, otherwise prints the snapshot to stdout.
pub fn run(output: Option<&Path>, config: &FetchConfig) -> Result<()> {
    let rt = tokio::runtime::Runtime::new().context("creating async runtime")?;
    let snapshot = rt.block_on(fetch_snapshot(config))?;
    let json = serde_json::to_string_pretty(&snapshot)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating output directory {}", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("writing snapshot to {}", path.display()))?;
            println!("Wrote {} pools to {}", snapshot.pools.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Fetch and filter pools into a timestamped snapshot.
pub async fn fetch_snapshot(config: &FetchConfig) -> Result<YieldSnapshot> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(concat!("yield-table/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("creating HTTP client")?;

    let pools = defillama::fetch_pools(&client, config).await?;
    let records = defillama::select(&pools, config);
    tracing::info!(selected = records.len(), total = pools.len(), "filtered pools");

    Ok(YieldSnapshot {
        fetched_at: chrono::Utc::now().to_rfc3339(),
        source: "defillama".to_string(),
        pools: records,
    })
}
