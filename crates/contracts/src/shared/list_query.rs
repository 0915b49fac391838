//! Query model shared by every collection endpoint: free-text search and
//! named filters, a single sort key and page/limit.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One active sort key; multi-column sorting is not supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SortSpec {
    pub sort_by: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn new(sort_by: impl Into<String>, order: SortOrder) -> Self {
        Self {
            sort_by: sort_by.into(),
            order,
        }
    }

    pub fn is_sorted_by(&self, column: &str) -> bool {
        self.sort_by == column
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new("created_at", SortOrder::Desc)
    }
}

/// Filter values keyed by filter name.
///
/// The key set is fixed when the set is built; an empty string means
/// "no constraint". Writing to a key outside the shape is refused.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FilterSet {
    values: BTreeMap<String, String>,
}

impl FilterSet {
    /// Builds a set where every key starts unconstrained.
    pub fn with_keys<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            values: keys
                .into_iter()
                .map(|k| (k.into(), String::new()))
                .collect(),
        }
    }

    /// Builds a set from explicit initial values.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Returns `false` (and leaves the set untouched) for unknown keys.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.values.get_mut(key) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Entries that constrain the query.
    pub fn active(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

/// Combined list request: filters + sort + pagination cursor.
///
/// Serializes to the flat parameter set the list endpoints accept:
/// every non-empty filter by name, then `sortBy`, `order`, `page`, `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: FilterSet,
    pub sort: SortSpec,
    pub page: u32,
    pub limit: u32,
}

impl ListQuery {
    pub fn new(filters: FilterSet, sort: SortSpec, page: u32, limit: u32) -> Self {
        Self {
            filters,
            sort,
            page,
            limit,
        }
    }
}

impl Serialize for ListQuery {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.filters.active() {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry("sortBy", &self.sort.sort_by)?;
        map.serialize_entry("order", self.sort.order.as_str())?;
        map.serialize_entry("page", &self.page)?;
        map.serialize_entry("limit", &self.limit)?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_filters() -> FilterSet {
        FilterSet::with_keys(["search", "season", "category", "fabric_type"])
    }

    #[test]
    fn test_sort_order_toggles() {
        assert_eq!(SortOrder::Asc.toggled(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.toggled(), SortOrder::Asc);
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }

    #[test]
    fn test_filter_set_refuses_unknown_keys() {
        let mut filters = article_filters();
        assert!(filters.set("season", "Summer"));
        assert!(!filters.set("colour", "red"));
        assert!(!filters.contains_key("colour"));
        assert_eq!(filters.get("season"), Some("Summer"));
        assert_eq!(filters.keys().count(), 4);
    }

    #[test]
    fn test_active_count_ignores_empty_values() {
        let mut filters = article_filters();
        assert_eq!(filters.active_count(), 0);
        filters.set("search", "kurta");
        filters.set("category", "Men");
        assert_eq!(filters.active_count(), 2);
        filters.set("search", "");
        assert_eq!(filters.active_count(), 1);
        assert!(filters.is_active("category"));
        assert!(!filters.is_active("search"));
    }

    #[test]
    fn test_list_query_serializes_flat_params() {
        let mut filters = article_filters();
        filters.set("season", "Winter");
        let query = ListQuery::new(filters, SortSpec::new("sales_rate", SortOrder::Asc), 2, 15);
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "season": "Winter",
                "sortBy": "sales_rate",
                "order": "asc",
                "page": 2,
                "limit": 15
            })
        );
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let sort = SortSpec::default();
        assert!(sort.is_sorted_by("created_at"));
        assert_eq!(sort.order, SortOrder::Desc);
    }
}
