use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TableError;

/// A field the table can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Protocol,
    Chain,
    Apy,
    Tvl,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Protocol, SortKey::Chain, SortKey::Apy, SortKey::Tvl];

    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Protocol => "protocol",
            SortKey::Chain => "chain",
            SortKey::Apy => "apy",
            SortKey::Tvl => "tvl",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "protocol" => Ok(SortKey::Protocol),
            "chain" => Ok(SortKey::Chain),
            "apy" => Ok(SortKey::Apy),
            "tvl" => Ok(SortKey::Tvl),
            _ => Err(TableError::UnknownSortKey {
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortDirection {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            _ => Err(TableError::UnknownDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// Current sort column and direction of a table.
///
/// Starts at TVL, largest first. Re-selecting the active key flips the
/// direction; selecting another key switches to it in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            key: SortKey::Tvl,
            direction: SortDirection::Descending,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        SortState { key, direction }
    }

    pub fn request_sort(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_tvl_descending() {
        let state = SortState::default();
        assert_eq!(state.key, SortKey::Tvl);
        assert_eq!(state.direction, SortDirection::Descending);
    }

    #[test]
    fn test_same_key_flips_direction() {
        let mut state = SortState::default();
        state.request_sort(SortKey::Tvl);
        assert_eq!(state, SortState::new(SortKey::Tvl, SortDirection::Ascending));
        state.request_sort(SortKey::Tvl);
        assert_eq!(state, SortState::new(SortKey::Tvl, SortDirection::Descending));
    }

    #[test]
    fn test_new_key_resets_to_ascending() {
        let mut state = SortState::new(SortKey::Apy, SortDirection::Descending);
        state.request_sort(SortKey::Chain);
        assert_eq!(state, SortState::new(SortKey::Chain, SortDirection::Ascending));

        // Even when the previous direction was already ascending
        state.request_sort(SortKey::Protocol);
        assert_eq!(
            state,
            SortState::new(SortKey::Protocol, SortDirection::Ascending)
        );
    }

    #[test]
    fn test_parse_keys_and_directions() {
        assert_eq!("APY".parse::<SortKey>().unwrap(), SortKey::Apy);
        assert_eq!(" tvl ".parse::<SortKey>().unwrap(), SortKey::Tvl);
        assert!("pool".parse::<SortKey>().is_err());

        assert_eq!(
            "descending".parse::<SortDirection>().unwrap(),
            SortDirection::Descending
        );
        assert_eq!("Asc".parse::<SortDirection>().unwrap(), SortDirection::Ascending);
        assert!("up".parse::<SortDirection>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let state = SortState::default();
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"key":"tvl","direction":"desc"}"#);
    }
}
