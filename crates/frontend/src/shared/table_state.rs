//! Filter / sort / pagination controller shared by every list page.
//!
//! Filters are edited in a draft (`temp_filters`) and only become the
//! committed set on [`TableState::apply_filters`]. Every committed change is
//! reflected in [`TableState::fetch_key`], which the list fetcher watches.
//! Responses are matched against the generation counter so that a slow,
//! superseded request can never overwrite newer rows.

use contracts::shared::list_query::{FilterSet, ListQuery, SortOrder, SortSpec};

pub const DEFAULT_PAGE_SIZE: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    pub fn new(limit: u32) -> Self {
        Self {
            page: 1,
            limit: limit.max(1),
            total: 0,
            total_pages: 0,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based inclusive row range shown on the current page.
    pub fn visible_range(&self) -> (u64, u64) {
        if self.total == 0 {
            return (0, 0);
        }
        let limit = u64::from(self.limit);
        let first = u64::from(self.page.saturating_sub(1)) * limit + 1;
        let last = (u64::from(self.page) * limit).min(self.total);
        (first.min(self.total), last)
    }

    pub fn range_label(&self) -> String {
        let (first, last) = self.visible_range();
        format!("Showing {}-{} of {}", first, last, self.total)
    }
}

/// Raw value typed into the page input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageInput {
    /// Input cleared while the user is still typing.
    Pending,
    Number(i64),
}

impl PageInput {
    /// `None` for text that is neither empty nor an integer.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Some(PageInput::Pending);
        }
        trimmed.parse::<i64>().ok().map(PageInput::Number)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCommit {
    Committed(u32),
    /// Nothing committed; the current page is kept.
    Pending,
    /// There are no pages yet, so no page can be selected.
    NoPages,
}

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Everything whose change requires a new fetch.
///
/// The page size is not part of the key: it is read when the query is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchKey {
    filters: FilterSet,
    sort: SortSpec,
    page: u32,
    revision: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    initial_filters: FilterSet,
    temp_filters: FilterSet,
    filters: FilterSet,
    sort: SortSpec,
    pagination: Pagination,
    revision: u64,
    generation: u64,
}

impl TableState {
    pub fn new(initial_filters: FilterSet, initial_sort: SortSpec) -> Self {
        Self {
            temp_filters: initial_filters.clone(),
            filters: initial_filters.clone(),
            initial_filters,
            sort: initial_sort,
            pagination: Pagination::new(DEFAULT_PAGE_SIZE),
            revision: 0,
            generation: 0,
        }
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.pagination = Pagination::new(limit);
        self
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn temp_filters(&self) -> &FilterSet {
        &self.temp_filters
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// Edits the draft only. Unknown keys are refused.
    pub fn set_temp_filter(&mut self, key: &str, value: impl Into<String>) -> bool {
        self.temp_filters.set(key, value)
    }

    /// Commits the draft and returns to the first page.
    pub fn apply_filters(&mut self) {
        self.filters = self.temp_filters.clone();
        self.pagination.page = 1;
        self.revision += 1;
    }

    /// Restores the initial filters in both the draft and the committed set.
    pub fn reset_filters(&mut self) {
        self.temp_filters = self.initial_filters.clone();
        self.filters = self.initial_filters.clone();
        self.pagination.page = 1;
        self.revision += 1;
    }

    /// Same column toggles the order, a new column starts ascending.
    pub fn handle_sort(&mut self, column: &str) {
        if self.sort.is_sorted_by(column) {
            self.sort.order = self.sort.order.toggled();
        } else {
            self.sort = SortSpec::new(column, SortOrder::Asc);
        }
        self.pagination.page = 1;
    }

    pub fn set_page(&mut self, input: PageInput) -> PageCommit {
        match input {
            PageInput::Pending => PageCommit::Pending,
            PageInput::Number(_) if self.pagination.total_pages == 0 => PageCommit::NoPages,
            PageInput::Number(n) => {
                let max = i64::from(self.pagination.total_pages);
                let page = n.clamp(1, max) as u32;
                self.pagination.page = page;
                PageCommit::Committed(page)
            }
        }
    }

    pub fn next_page(&mut self) -> PageCommit {
        self.set_page(PageInput::Number(i64::from(self.pagination.page) + 1))
    }

    pub fn previous_page(&mut self) -> PageCommit {
        self.set_page(PageInput::Number(i64::from(self.pagination.page) - 1))
    }

    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }

    pub fn is_filtering(&self) -> bool {
        self.active_filter_count() > 0
    }

    /// Forces a fetch with unchanged parameters (after a mutation).
    pub fn request_reload(&mut self) {
        self.revision += 1;
    }

    pub fn query(&self) -> ListQuery {
        ListQuery::new(
            self.filters.clone(),
            self.sort.clone(),
            self.pagination.page,
            self.pagination.limit,
        )
    }

    pub fn fetch_key(&self) -> FetchKey {
        FetchKey {
            filters: self.filters.clone(),
            sort: self.sort.clone(),
            page: self.pagination.page,
            revision: self.revision,
        }
    }

    /// Issues a new ticket; all earlier tickets become stale.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Stores the totals of a response. Returns `false` for stale tickets.
    ///
    /// A page beyond the new last page is pulled back to it, which in turn
    /// changes the fetch key and triggers one more fetch.
    pub fn accept(&mut self, ticket: FetchTicket, total: u64, total_pages: u32) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.pagination.total = total;
        self.pagination.total_pages = total_pages;
        if total_pages > 0 && self.pagination.page > total_pages {
            self.pagination.page = total_pages;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_table() -> TableState {
        TableState::new(
            FilterSet::with_keys(["search", "season", "category", "fabric_type"]),
            SortSpec::default(),
        )
    }

    fn with_pages(total: u64, total_pages: u32) -> TableState {
        let mut table = article_table();
        let ticket = table.begin_fetch();
        assert!(table.accept(ticket, total, total_pages));
        table
    }

    #[test]
    fn test_draft_is_not_committed_until_apply() {
        let mut table = article_table();
        assert!(table.set_temp_filter("season", "Summer"));
        assert_eq!(table.filters().get("season"), Some(""));
        assert_eq!(table.active_filter_count(), 0);

        table.apply_filters();
        assert_eq!(table.filters().get("season"), Some("Summer"));
        assert_eq!(table.active_filter_count(), 1);
        assert!(table.is_filtering());
    }

    #[test]
    fn test_unknown_filter_key_refused() {
        let mut table = article_table();
        assert!(!table.set_temp_filter("colour", "red"));
        assert!(!table.temp_filters().contains_key("colour"));
    }

    #[test]
    fn test_apply_returns_to_first_page() {
        let mut table = with_pages(100, 7);
        table.set_page(PageInput::Number(5));
        table.set_temp_filter("season", "Summer");
        table.apply_filters();
        assert_eq!(table.pagination().page, 1);
        assert_eq!(table.query().filters.get("season"), Some("Summer"));
    }

    #[test]
    fn test_reset_restores_initial_filters() {
        let mut table = TableState::new(
            FilterSet::from_pairs([("search", ""), ("role", "admin")]),
            SortSpec::default(),
        );
        table.set_temp_filter("role", "developer");
        table.set_temp_filter("search", "ali");
        table.apply_filters();
        table.reset_filters();
        assert_eq!(table.filters().get("role"), Some("admin"));
        assert_eq!(table.temp_filters().get("search"), Some(""));
    }

    #[test]
    fn test_apply_and_reset_always_refetch() {
        let mut table = article_table();
        let before = table.fetch_key();
        table.apply_filters();
        assert_ne!(before, table.fetch_key());
        let before = table.fetch_key();
        table.reset_filters();
        assert_ne!(before, table.fetch_key());
    }

    #[test]
    fn test_handle_sort_toggle_and_switch() {
        let mut table = article_table();
        assert_eq!(table.sort(), &SortSpec::new("created_at", SortOrder::Desc));

        table.handle_sort("created_at");
        assert_eq!(table.sort().order, SortOrder::Asc);
        table.handle_sort("created_at");
        assert_eq!(table.sort().order, SortOrder::Desc);

        table.handle_sort("total_cost");
        assert_eq!(table.sort(), &SortSpec::new("total_cost", SortOrder::Asc));
    }

    #[test]
    fn test_handle_sort_resets_page() {
        let mut table = with_pages(60, 4);
        table.set_page(PageInput::Number(3));
        table.handle_sort("article_no");
        assert_eq!(table.pagination().page, 1);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut table = with_pages(70, 5);
        assert_eq!(table.set_page(PageInput::Number(9)), PageCommit::Committed(5));
        assert_eq!(table.set_page(PageInput::Number(0)), PageCommit::Committed(1));
        assert_eq!(table.set_page(PageInput::Number(-4)), PageCommit::Committed(1));
        assert_eq!(table.set_page(PageInput::Number(3)), PageCommit::Committed(3));
    }

    #[test]
    fn test_set_page_pending_keeps_page() {
        let mut table = with_pages(70, 5);
        table.set_page(PageInput::Number(4));
        let key = table.fetch_key();
        assert_eq!(table.set_page(PageInput::Pending), PageCommit::Pending);
        assert_eq!(table.pagination().page, 4);
        assert_eq!(key, table.fetch_key());
    }

    #[test]
    fn test_set_page_without_pages() {
        let mut table = article_table();
        assert_eq!(table.set_page(PageInput::Number(2)), PageCommit::NoPages);
        assert_eq!(table.pagination().page, 1);
    }

    #[test]
    fn test_page_input_parse() {
        assert_eq!(PageInput::parse(""), Some(PageInput::Pending));
        assert_eq!(PageInput::parse(" 12 "), Some(PageInput::Number(12)));
        assert_eq!(PageInput::parse("-1"), Some(PageInput::Number(-1)));
        assert_eq!(PageInput::parse("2a"), None);
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let mut table = article_table();
        let first = table.begin_fetch();
        let second = table.begin_fetch();
        assert!(!table.accept(first, 999, 67));
        assert_eq!(table.pagination().total, 0);
        assert!(table.accept(second, 20, 2));
        assert_eq!(table.pagination().total_pages, 2);
        assert!(!table.is_current(first));
    }

    #[test]
    fn test_accept_clamps_page_past_end() {
        let mut table = with_pages(100, 7);
        table.set_page(PageInput::Number(7));
        let ticket = table.begin_fetch();
        table.accept(ticket, 16, 2);
        assert_eq!(table.pagination().page, 2);
    }

    #[test]
    fn test_accept_empty_result_keeps_page_one() {
        let mut table = article_table();
        let ticket = table.begin_fetch();
        table.accept(ticket, 0, 0);
        assert_eq!(table.pagination().page, 1);
        assert_eq!(table.pagination().range_label(), "Showing 0-0 of 0");
    }

    #[test]
    fn test_range_label() {
        let mut table = with_pages(32, 3);
        assert_eq!(table.pagination().range_label(), "Showing 1-15 of 32");
        table.set_page(PageInput::Number(3));
        assert_eq!(table.pagination().range_label(), "Showing 31-32 of 32");
        assert!(!table.pagination().has_next());
        assert!(table.pagination().has_previous());
    }

    #[test]
    fn test_query_carries_committed_state() {
        let mut table = article_table().with_limit(6);
        table.set_temp_filter("search", "polo");
        table.apply_filters();
        table.handle_sort("sales_rate");
        let query = table.query();
        assert_eq!(query.limit, 6);
        assert_eq!(query.page, 1);
        assert_eq!(query.sort, SortSpec::new("sales_rate", SortOrder::Asc));
        assert_eq!(query.filters.active_count(), 1);
    }

    #[test]
    fn test_page_size_is_not_part_of_fetch_key() {
        let key = article_table().fetch_key();
        let resized = article_table().with_limit(6);
        assert_eq!(key, resized.fetch_key());
        assert_eq!(resized.query().limit, 6);
    }

    #[test]
    fn test_request_reload_changes_key() {
        let mut table = article_table();
        let key = table.fetch_key();
        table.request_reload();
        assert_ne!(key, table.fetch_key());
    }
}
