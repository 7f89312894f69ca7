use std::cmp::Ordering;

use crate::model::{SortDirection, SortKey, SortState, YieldRecord};

/// Compare two records on a single field, ascending.
///
/// Numbers compare numerically (`-0.0 == 0.0`); NaN sorts after every number.
pub fn compare_by(key: SortKey, a: &YieldRecord, b: &YieldRecord) -> Ordering {
    match key {
        SortKey::Protocol => a.protocol.cmp(&b.protocol),
        SortKey::Chain => a.chain.cmp(&b.chain),
        SortKey::Apy => compare_f64(a.apy, b.apy),
        SortKey::Tvl => compare_f64(a.tvl, b.tvl),
    }
}

// Total ordering is only needed once NaN is involved.
fn compare_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or_else(|| a.total_cmp(&b))
}

/// Return the records ordered by `state`, leaving `data` untouched.
///
/// The sort is stable in both directions: records with equal keys keep their
/// input order, so descending is not simply ascending reversed.
pub fn sorted_view<'a>(data: &'a [YieldRecord], state: &SortState) -> Vec<&'a YieldRecord> {
    let mut rows: Vec<&YieldRecord> = data.iter().collect();
    rows.sort_by(|a, b| {
        let ord = compare_by(state.key, a, b);
        match state.direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    rows
}

/// Owned variant of [`sorted_view`] for callers that serialize the result.
pub fn sorted_records(data: &[YieldRecord], state: &SortState) -> Vec<YieldRecord> {
    sorted_view(data, state).into_iter().cloned().collect()
}
