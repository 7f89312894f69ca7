pub mod sort;
pub mod view;

use std::fmt;

use crate::model::{SortKey, SortState, YieldRecord};

pub use sort::{compare_by, sorted_records, sorted_view};
pub use view::{
    Align, BarWidth, Cell, CellContent, Column, HeaderCell, LoadingPlaceholder, TableRow,
    TableView, View, build_view,
};

type Listener = Box<dyn FnMut(&SortState)>;

/// A yield table instance: owns the sort state and turns records into views.
///
/// Listeners registered with [`YieldTable::subscribe`] are called after
/// every sort transition, so a host can re-render.
pub struct YieldTable {
    state: SortState,
    listeners: Vec<Listener>,
}

impl YieldTable {
    pub fn new() -> Self {
        Self::with_state(SortState::default())
    }

    pub fn with_state(state: SortState) -> Self {
        YieldTable {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&SortState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Select `key` as the sort column, flipping direction if it already is.
    pub fn request_sort(&mut self, key: SortKey) {
        self.state.request_sort(key);
        tracing::debug!(key = %self.state.key, direction = %self.state.direction, "sort changed");
        let state = self.state;
        for listener in &mut self.listeners {
            listener(&state);
        }
    }

    /// Header click. Returns `false` for columns that are not sortable.
    pub fn activate(&mut self, column: Column) -> bool {
        match column.sort_key() {
            Some(key) => {
                self.request_sort(key);
                true
            }
            None => false,
        }
    }

    pub fn sorted<'a>(&self, data: &'a [YieldRecord]) -> Vec<&'a YieldRecord> {
        sorted_view(data, &self.state)
    }

    pub fn render(&self, data: &[YieldRecord], is_loading: bool) -> View {
        build_view(data, &self.state, is_loading)
    }
}

impl Default for YieldTable {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for YieldTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YieldTable")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
