use serde::Serialize;

use crate::error::TableError;
use crate::model::YieldRecord;

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    protocol: &'a str,
    chain: &'a str,
    apy: f64,
    tvl: f64,
    pool: &'a str,
    reward_tokens: String,
}

/// Export records, in the given order, as CSV with raw numeric values.
/// Reward tokens are joined with `;`.
pub fn render_csv(records: &[&YieldRecord]) -> Result<String, TableError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(["protocol", "chain", "apy", "tvl", "pool", "reward_tokens"])?;
    for r in records {
        writer.serialize(CsvRow {
            protocol: &r.protocol,
            chain: &r.chain,
            apy: r.apy,
            tvl: r.tvl,
            pool: &r.pool,
            reward_tokens: r.reward_tokens.join(";"),
        })?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TableError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
