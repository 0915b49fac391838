use crate::shared::table_state::TableState;
use contracts::shared::list_query::{FilterSet, SortSpec};
use leptos::prelude::*;

/// Filter keys of the articles table.
pub const FILTER_KEYS: [&str; 4] = ["search", "season", "category", "fabric_type"];

pub fn initial_filters() -> FilterSet {
    FilterSet::with_keys(FILTER_KEYS)
}

pub fn create_state() -> RwSignal<TableState> {
    RwSignal::new(TableState::new(initial_filters(), SortSpec::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = TableState::new(initial_filters(), SortSpec::default());
        assert!(!state.is_filtering());
        assert_eq!(state.sort().sort_by, "created_at");
        assert!(state.temp_filters().contains_key("fabric_type"));
        assert!(!state.temp_filters().contains_key("size"));
    }
}
