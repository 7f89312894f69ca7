use serde::Serialize;

use crate::format::{format_percent, format_usd};
use crate::model::{SortDirection, SortKey, SortState, YieldRecord};

use super::sort::sorted_view;

// ── Columns ──────────────────────────────────────────────────────────

/// The six table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Column {
    Protocol,
    Chain,
    Apy,
    Tvl,
    Pool,
    RewardTokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Left,
    Right,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Protocol,
        Column::Chain,
        Column::Apy,
        Column::Tvl,
        Column::Pool,
        Column::RewardTokens,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Column::Protocol => "Protocol",
            Column::Chain => "Chain",
            Column::Apy => "APY",
            Column::Tvl => "TVL",
            Column::Pool => "Pool",
            Column::RewardTokens => "Reward Tokens",
        }
    }

    /// The sort key a header click on this column requests, if any.
    pub fn sort_key(&self) -> Option<SortKey> {
        match self {
            Column::Protocol => Some(SortKey::Protocol),
            Column::Chain => Some(SortKey::Chain),
            Column::Apy => Some(SortKey::Apy),
            Column::Tvl => Some(SortKey::Tvl),
            Column::Pool | Column::RewardTokens => None,
        }
    }

    pub fn align(&self) -> Align {
        match self {
            Column::Apy | Column::Tvl => Align::Right,
            _ => Align::Left,
        }
    }
}

// ── View model ───────────────────────────────────────────────────────

/// What a renderer should draw for one pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum View {
    Loading(LoadingPlaceholder),
    Ready(TableView),
}

/// Width of a pulsing placeholder bar relative to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarWidth {
    Full,
    FiveSixths,
}

impl BarWidth {
    /// Scale a full width in characters/pixels to this bar's width.
    pub fn of(&self, full: usize) -> usize {
        match self {
            BarWidth::Full => full,
            BarWidth::FiveSixths => full * 5 / 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadingPlaceholder {
    pub bars: [BarWidth; 3],
}

impl Default for LoadingPlaceholder {
    fn default() -> Self {
        LoadingPlaceholder {
            bars: [BarWidth::Full, BarWidth::FiveSixths, BarWidth::Full],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    pub header: Vec<HeaderCell>,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderCell {
    pub column: Column,
    pub label: &'static str,
    /// Present when the header is a click target.
    pub sort_key: Option<SortKey>,
    pub align: Align,
    /// Direction of the active sort, set on the active column only.
    pub active: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub key: String,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    pub column: Column,
    pub align: Align,
    pub content: CellContent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellContent {
    Text(String),
    /// One pill per reward token.
    Pills(Vec<String>),
}

impl CellContent {
    /// Plain-text rendering, pills shown as `[TOKEN]`.
    pub fn plain(&self) -> String {
        match self {
            CellContent::Text(s) => s.clone(),
            CellContent::Pills(tokens) => tokens
                .iter()
                .map(|t| format!("[{t}]"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

// ── Construction ─────────────────────────────────────────────────────

/// Build the view for one render pass.
pub fn build_view(data: &[YieldRecord], state: &SortState, is_loading: bool) -> View {
    if is_loading {
        return View::Loading(LoadingPlaceholder::default());
    }

    let header = Column::ALL
        .iter()
        .map(|&column| {
            let sort_key = column.sort_key();
            HeaderCell {
                column,
                label: column.label(),
                sort_key,
                align: column.align(),
                active: (sort_key == Some(state.key)).then_some(state.direction),
            }
        })
        .collect();

    let rows = sorted_view(data, state)
        .into_iter()
        .enumerate()
        .map(|(position, record)| TableRow {
            key: record.row_key(position),
            cells: Column::ALL
                .iter()
                .map(|&column| Cell {
                    column,
                    align: column.align(),
                    content: cell_content(column, record),
                })
                .collect(),
        })
        .collect();

    View::Ready(TableView { header, rows })
}

fn cell_content(column: Column, record: &YieldRecord) -> CellContent {
    match column {
        Column::Protocol => CellContent::Text(record.protocol.clone()),
        Column::Chain => CellContent::Text(record.chain.clone()),
        Column::Apy => CellContent::Text(format_percent(record.apy)),
        Column::Tvl => CellContent::Text(format_usd(record.tvl)),
        Column::Pool => CellContent::Text(record.pool.clone()),
        Column::RewardTokens => CellContent::Pills(record.reward_tokens.clone()),
    }
}
