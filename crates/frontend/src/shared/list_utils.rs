use contracts::shared::list_query::{SortOrder, SortSpec};

/// Sort glyph for a column header.
pub fn sort_indicator(sort: &SortSpec, column: &str) -> &'static str {
    if sort.is_sorted_by(column) {
        match sort.order {
            SortOrder::Asc => " ▲",
            SortOrder::Desc => " ▼",
        }
    } else {
        " ⇅"
    }
}

pub fn sort_class(sort: &SortSpec, column: &str) -> &'static str {
    if sort.is_sorted_by(column) {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}

/// Case-insensitive substring match used by client-side search boxes.
pub fn matches_search(haystack: &str, needle: &str) -> bool {
    let needle = needle.trim();
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = SortSpec::new("total_cost", SortOrder::Desc);
        assert_eq!(sort_indicator(&sort, "total_cost"), " ▼");
        assert_eq!(sort_indicator(&sort, "article_no"), " ⇅");
        assert_eq!(sort_class(&sort, "total_cost"), "sort-icon sort-icon--active");
    }

    #[test]
    fn test_matches_search() {
        assert!(matches_search("Summer 24", "summer"));
        assert!(matches_search("anything", "  "));
        assert!(!matches_search("Winter", "sum"));
    }
}
