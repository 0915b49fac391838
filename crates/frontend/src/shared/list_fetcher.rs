//! Binds a [`TableState`] to a list endpoint.
//!
//! A fetch is issued whenever the table's fetch key changes. Only the
//! response to the most recent request is applied; older ones are dropped.

use crate::shared::api_client::ApiError;
use crate::shared::mutation::failure_message;
use crate::shared::notify::use_notifier;
use crate::shared::table_state::{FetchTicket, TableState};
use contracts::shared::envelope::ListPage;
use contracts::shared::list_query::ListQuery;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

/// What happened to one list response.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Applied,
    /// A newer request was issued meanwhile; nothing was touched.
    Stale,
    /// The request failed; previous rows and totals are kept.
    Failed(ApiError),
}

/// Applies a list response to the table and the row buffer.
pub fn apply_result<T>(
    table: &mut TableState,
    rows: &mut Vec<T>,
    ticket: FetchTicket,
    result: Result<ListPage<T>, ApiError>,
) -> FetchOutcome {
    if !table.is_current(ticket) {
        return FetchOutcome::Stale;
    }
    match result {
        Ok(page) => {
            table.accept(ticket, page.total, page.total_pages);
            *rows = page.rows;
            FetchOutcome::Applied
        }
        Err(err) => FetchOutcome::Failed(err),
    }
}

pub struct ListResource<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub loading: RwSignal<bool>,
    table: RwSignal<TableState>,
}

impl<T: Send + Sync + 'static> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListResource<T> {}

impl<T: Send + Sync + 'static> ListResource<T> {
    /// Refetches with the current parameters.
    pub fn reload(&self) {
        self.table.update(TableState::request_reload);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.with(Vec::is_empty)
    }
}

pub fn use_list_fetcher<T, F, Fut>(
    table: RwSignal<TableState>,
    fallback_message: &'static str,
    loader: F,
) -> ListResource<T>
where
    T: Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + Copy + 'static,
    Fut: Future<Output = Result<ListPage<T>, ApiError>> + 'static,
{
    let notifier = use_notifier();
    let rows = RwSignal::new(Vec::<T>::new());
    let loading = RwSignal::new(true);

    let key = Memo::new(move |_| table.with(TableState::fetch_key));

    Effect::new(move |_| {
        key.track();
        let Some((ticket, query)) = table.try_update(|t| (t.begin_fetch(), t.query())) else {
            return;
        };
        loading.set(true);
        spawn_local(async move {
            let result = loader(query).await;
            let mut buffer = Vec::new();
            let outcome = table
                .try_update(|t| apply_result(t, &mut buffer, ticket, result))
                .unwrap_or(FetchOutcome::Stale);
            match outcome {
                FetchOutcome::Applied => rows.set(buffer),
                FetchOutcome::Stale => {
                    log::debug!("discarding stale list response");
                    return;
                }
                FetchOutcome::Failed(err) => {
                    log::warn!("list fetch failed: {}", err);
                    if let Some(message) = failure_message(&err, fallback_message) {
                        notifier.error(message);
                    }
                }
            }
            loading.set(false);
        });
    });

    ListResource {
        rows,
        loading,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::{FilterSet, SortSpec};

    fn table() -> TableState {
        TableState::new(FilterSet::with_keys(["search"]), SortSpec::default())
    }

    fn page(rows: &[&'static str], total: u64, total_pages: u32) -> ListPage<&'static str> {
        ListPage {
            rows: rows.to_vec(),
            total,
            total_pages,
        }
    }

    #[test]
    fn test_successful_response_replaces_rows_and_totals() {
        let mut table = table();
        let mut rows = vec!["old"];
        let ticket = table.begin_fetch();
        let outcome = apply_result(&mut table, &mut rows, ticket, Ok(page(&["a", "b"], 17, 2)));
        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(rows, vec!["a", "b"]);
        assert_eq!(table.pagination().total, 17);
        assert_eq!(table.pagination().total_pages, 2);
    }

    #[test]
    fn test_failed_response_keeps_rows() {
        let mut table = table();
        let mut rows = Vec::new();
        let first = table.begin_fetch();
        apply_result(&mut table, &mut rows, first, Ok(page(&["a"], 1, 1)));

        let second = table.begin_fetch();
        let err = ApiError::Network("offline".into());
        let outcome = apply_result(&mut table, &mut rows, second, Err(err.clone()));
        assert_eq!(outcome, FetchOutcome::Failed(err));
        assert_eq!(rows, vec!["a"]);
        assert_eq!(table.pagination().total, 1);
    }

    #[test]
    fn test_stale_response_touches_nothing() {
        let mut table = table();
        let mut rows = Vec::new();
        let slow = table.begin_fetch();
        let fast = table.begin_fetch();
        apply_result(&mut table, &mut rows, fast, Ok(page(&["new"], 1, 1)));

        let outcome = apply_result(&mut table, &mut rows, slow, Ok(page(&["x", "y"], 90, 6)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(rows, vec!["new"]);
        assert_eq!(table.pagination().total, 1);
        assert_eq!(table.pagination().total_pages, 1);

        let outcome = apply_result(
            &mut table,
            &mut rows,
            slow,
            Err(ApiError::Network("offline".into())),
        );
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(rows, vec!["new"]);
    }
}
