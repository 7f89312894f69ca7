use std::cmp::Ordering;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::config::FetchConfig;
use crate::model::YieldRecord;

use super::types::retry;

// ── API response types ───────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct PoolsResponse {
    data: Vec<Pool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pool {
    pub chain: Option<String>,
    pub project: String,
    pub symbol: String,
    #[serde(rename = "tvlUsd")]
    pub tvl_usd: Option<f64>,
    pub apy: Option<f64>,
    #[serde(rename = "apyBase")]
    pub apy_base: Option<f64>,
    #[serde(rename = "apyReward")]
    pub apy_reward: Option<f64>,
    #[serde(rename = "rewardTokens", default)]
    pub reward_tokens: Option<Vec<String>>,
}

// ── Public API ───────────────────────────────────────────────────────

/// Download every pool listed by the DefiLlama yields API.
pub async fn fetch_pools(client: &reqwest::Client, config: &FetchConfig) -> Result<Vec<Pool>> {
    let url = config.pools_url.clone();
    let resp = retry(config.retries, || {
        let client = client.clone();
        let url = url.clone();
        async move {
            let r = client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<PoolsResponse>()
                .await?;
            Ok(r)
        }
    })
    .await
    .context("fetching DefiLlama pools")?;

    tracing::info!(pools = resp.data.len(), url = %config.pools_url, "fetched DefiLlama pools");
    Ok(resp.data)
}

/// Convert a DefiLlama pool into a table record.
///
/// A missing `apy` falls back to `apyBase + apyReward`; missing numbers
/// become zero.
pub fn to_record(pool: &Pool) -> YieldRecord {
    let apy = pool.apy.unwrap_or_else(|| {
        pool.apy_base.unwrap_or(0.0) + pool.apy_reward.unwrap_or(0.0)
    });
    YieldRecord {
        protocol: pool.project.clone(),
        chain: pool.chain.clone().unwrap_or_default(),
        apy,
        tvl: pool.tvl_usd.unwrap_or(0.0),
        pool: pool.symbol.clone(),
        reward_tokens: pool.reward_tokens.clone().unwrap_or_default(),
    }
}

/// Apply the chain/project/min-TVL filters and the limit from `config`.
///
/// When a limit is set the largest pools by TVL are kept, in descending
/// TVL order; otherwise source order is preserved.
pub fn select(pools: &[Pool], config: &FetchConfig) -> Vec<YieldRecord> {
    let chain = config.chain.as_ref().map(|c| c.to_lowercase());
    let project = config.project.as_ref().map(|p| p.to_lowercase());

    let mut records: Vec<YieldRecord> = pools
        .iter()
        .filter(|p| {
            let chain_match = chain.as_ref().is_none_or(|c| {
                p.chain
                    .as_ref()
                    .is_some_and(|pc| pc.to_lowercase() == *c)
            });
            let project_match = project
                .as_ref()
                .is_none_or(|proj| p.project.to_lowercase().starts_with(proj.as_str()));
            chain_match && project_match && p.tvl_usd.unwrap_or(0.0) >= config.min_tvl
        })
        .map(to_record)
        .collect();

    if let Some(limit) = config.limit {
        records.sort_by(|a, b| b.tvl.partial_cmp(&a.tvl).unwrap_or(Ordering::Equal));
        records.truncate(limit);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(project: &str, chain: &str, symbol: &str, tvl: f64) -> Pool {
        Pool {
            chain: Some(chain.to_string()),
            project: project.to_string(),
            symbol: symbol.to_string(),
            tvl_usd: Some(tvl),
            apy: Some(3.5),
            apy_base: None,
            apy_reward: None,
            reward_tokens: None,
        }
    }

    #[test]
    fn test_parse_pools_response() {
        let json = r#"{
            "status": "success",
            "data": [{
                "pool": "747c1d2a-c668-4682-b9f9-296708a3dd90",
                "chain": "Ethereum",
                "project": "lido",
                "symbol": "STETH",
                "tvlUsd": 24000000000.0,
                "apyBase": 2.9,
                "apyReward": null,
                "apy": 2.9,
                "rewardTokens": null
            }, {
                "pool": "aa70268e-4b52-42bf-a116-608b370f9501",
                "chain": "Arbitrum",
                "project": "aave-v3",
                "symbol": "USDC",
                "tvlUsd": 150000000.0,
                "apyBase": 4.0,
                "apyReward": 1.25,
                "rewardTokens": ["0x912CE59144191C1204E64559FE8253a0e49E6548"]
            }]
        }"#;
        let resp: PoolsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 2);

        let lido = to_record(&resp.data[0]);
        assert_eq!(lido.protocol, "lido");
        assert_eq!(lido.pool, "STETH");
        assert_eq!(lido.apy, 2.9);
        assert!(lido.reward_tokens.is_empty());

        // No "apy" field: base + reward
        let aave = to_record(&resp.data[1]);
        assert_eq!(aave.apy, 5.25);
        assert_eq!(aave.chain, "Arbitrum");
        assert_eq!(aave.reward_tokens.len(), 1);
    }

    #[test]
    fn test_select_filters() {
        let pools = vec![
            pool("aave-v3", "Ethereum", "USDC", 500.0),
            pool("aave-v2", "Ethereum", "DAI", 50.0),
            pool("curve-dex", "Ethereum", "3CRV", 900.0),
            pool("aave-v3", "Arbitrum", "USDC", 700.0),
        ];

        let config = FetchConfig {
            chain: Some("ethereum".into()),
            project: Some("AAVE".into()),
            ..FetchConfig::default()
        };
        let records = select(&pools, &config);
        let symbols: Vec<&str> = records.iter().map(|r| r.pool.as_str()).collect();
        assert_eq!(symbols, vec!["USDC", "DAI"]);

        let config = FetchConfig {
            min_tvl: 100.0,
            ..FetchConfig::default()
        };
        assert_eq!(select(&pools, &config).len(), 3);
    }

    #[test]
    fn test_select_limit_keeps_largest() {
        let pools = vec![
            pool("a", "Ethereum", "A", 10.0),
            pool("b", "Ethereum", "B", 30.0),
            pool("c", "Ethereum", "C", 20.0),
        ];
        let config = FetchConfig {
            limit: Some(2),
            ..FetchConfig::default()
        };
        let records = select(&pools, &config);
        let protocols: Vec<&str> = records.iter().map(|r| r.protocol.as_str()).collect();
        assert_eq!(protocols, vec!["b", "c"]);
    }
}
