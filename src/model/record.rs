use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One yield-farming opportunity as shown in a table row.
///
/// In JSON, field names are camelCase:
/// `{"protocol": "aave-v3", "chain": "Ethereum", "apy": 4.1, "tvl": 1.2e9,
///   "pool": "USDC", "rewardTokens": ["AAVE"]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct YieldRecord {
    /// Protocol slug or display name (e.g. "aave-v3").
    pub protocol: String,
    /// Chain the pool lives on (e.g. "Ethereum", "Arbitrum").
    pub chain: String,
    /// Annual percentage yield, in percentage points (5.0 = 5%).
    pub apy: f64,
    /// Total value locked, in USD.
    pub tvl: f64,
    /// Pool symbol (e.g. "USDC-WETH").
    pub pool: String,
    /// Tokens paid out as rewards, in display order.
    #[serde(default)]
    pub reward_tokens: Vec<String>,
}

impl YieldRecord {
    /// Row key used by renderers: `{protocol}-{pool}-{position}`.
    pub fn row_key(&self, position: usize) -> String {
        format!("{}-{}-{}", self.protocol, self.pool, position)
    }
}

/// A set of records captured from a data source at one point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct YieldSnapshot {
    /// RFC 3339 timestamp of the fetch.
    pub fetched_at: String,
    /// Data source name (e.g. "defillama").
    pub source: String,
    /// Records in source order.
    pub pools: Vec<YieldRecord>,
}
