use crate::model::YieldRecord;

fn record(protocol: &str, chain: &str, apy: f64, tvl: f64, pool: &str, rewards: &[&str]) -> YieldRecord {
    YieldRecord {
        protocol: protocol.into(),
        chain: chain.into(),
        apy,
        tvl,
        pool: pool.into(),
        reward_tokens: rewards.iter().map(|t| t.to_string()).collect(),
    }
}

/// A small, realistic dataset for demos and docs.
pub fn sample_records() -> Vec<YieldRecord> {
    vec![
        record("lido", "Ethereum", 2.87, 24_310_000_000.0, "STETH", &[]),
        record("aave-v3", "Ethereum", 4.12, 1_840_000_000.0, "USDC", &[]),
        record("aave-v3", "Arbitrum", 5.36, 212_500_000.0, "USDC", &["ARB"]),
        record("curve-dex", "Ethereum", 1.94, 168_000_000.0, "DAI-USDC-USDT", &["CRV", "CVX"]),
        record("aerodrome-slipstream", "Base", 18.7, 96_400_000.0, "WETH-USDC", &["AERO"]),
        record("morpho-blue", "Base", 7.05, 61_200_000.0, "USDC", &["MORPHO"]),
        record("pendle", "Arbitrum", 11.4, 38_900_000.0, "PT-WEETH", &["PENDLE"]),
        record("hyperlend", "Hyperliquid L1", 9.8, 22_750_000.0, "USDT0", &["HYPE"]),
    ]
}

/// Print the sample dataset as JSON to stdout.
pub fn run() -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(&sample_records())?;
    println!("{json}");
    Ok(())
}
