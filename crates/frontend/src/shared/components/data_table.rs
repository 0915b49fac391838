//! Table frame shared by the list pages: toolbar, sortable header,
//! loading placeholder, empty state and pager around page-specific rows.

use super::empty_state::EmptyState;
use super::pagination_controls::PaginationControls;
use super::sortable_header_cell::SortableHeaderCell;
use crate::shared::icons::{icon, Icon};
use crate::shared::table_state::TableState;
use leptos::prelude::*;
use thaw::*;

const LOADING_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub align_right: bool,
}

impl Column {
    pub const fn sortable(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            align_right: false,
        }
    }

    pub const fn plain(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: false,
            align_right: false,
        }
    }

    pub const fn right(mut self) -> Self {
        self.align_right = true;
        self
    }
}

/// What the table body shows for a given load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    Skeleton,
    Empty,
    Rows,
}

impl BodyMode {
    pub fn of(loading: bool, row_count: usize) -> Self {
        match (loading, row_count) {
            (true, 0) => BodyMode::Skeleton,
            (false, 0) => BodyMode::Empty,
            _ => BodyMode::Rows,
        }
    }
}

/// Rows already on screen stay visible but dimmed while a new page loads.
pub fn wrapper_class(loading: bool) -> &'static str {
    if loading {
        "table-wrapper table-wrapper--busy"
    } else {
        "table-wrapper"
    }
}

/// Skeleton rows shown while the first page is loading.
#[component]
pub fn LoadingRows(columns: usize) -> impl IntoView {
    (0..LOADING_ROWS)
        .map(|_| {
            view! {
                <TableRow>
                    {(0..columns)
                        .map(|_| view! { <TableCell><div class="skeleton-line"></div></TableCell> })
                        .collect_view()}
                </TableRow>
            }
        })
        .collect_view()
}

/// Filters button labelled with the number of committed filters.
#[component]
pub fn FilterButton(table: RwSignal<TableState>, open: RwSignal<bool>) -> impl IntoView {
    let count = Memo::new(move |_| table.with(TableState::active_filter_count));

    view! {
        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(true)>
            {icon(Icon::Filter)}
            " Filters"
            {move || {
                let n = count.get();
                (n > 0).then(|| view! { <span class="filter-count">{n}</span> })
            }}
        </Button>
    }
}

#[component]
pub fn DataTable(
    table: RwSignal<TableState>,
    columns: Vec<Column>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] row_count: Signal<usize>,
    /// Rows for the current page
    children: ChildrenFn,
) -> impl IntoView {
    let column_count = columns.len();
    let is_filtering = Signal::derive(move || table.with(TableState::is_filtering));
    let on_reset = Callback::new(move |_| table.update(TableState::reset_filters));

    let header = columns
        .into_iter()
        .map(|column| {
            if column.sortable {
                view! {
                    <SortableHeaderCell
                        label=column.label
                        column=column.key
                        table=table
                        align_right=column.align_right
                    />
                }
                .into_any()
            } else {
                view! { <TableHeaderCell>{column.label}</TableHeaderCell> }.into_any()
            }
        })
        .collect_view();

    view! {
        <div class="data-table">
            <div
                class=move || wrapper_class(loading.get())
                aria-busy=move || loading.get().to_string()
            >
                <Table>
                    <TableHeader>
                        <TableRow>{header}</TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || match BodyMode::of(loading.get(), row_count.get()) {
                            BodyMode::Skeleton => {
                                view! { <LoadingRows columns=column_count /> }.into_any()
                            }
                            BodyMode::Empty => {
                                view! {
                                    <EmptyState
                                        is_filtering=is_filtering
                                        on_reset=on_reset
                                        col_span=column_count
                                    />
                                }
                                .into_any()
                            }
                            BodyMode::Rows => children().into_any(),
                        }}
                    </TableBody>
                </Table>
            </div>
            <div class="data-table__footer">
                <Show when=move || { loading.get() && row_count.get() > 0 }>
                    <span class="data-table__busy"><Spinner size=SpinnerSize::Small /></span>
                </Show>
                <PaginationControls table=table />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_mode() {
        assert_eq!(BodyMode::of(true, 0), BodyMode::Skeleton);
        assert_eq!(BodyMode::of(false, 0), BodyMode::Empty);
        assert_eq!(BodyMode::of(false, 12), BodyMode::Rows);
    }

    #[test]
    fn test_reload_keeps_rows_and_marks_busy() {
        assert_eq!(BodyMode::of(true, 15), BodyMode::Rows);
        assert_eq!(wrapper_class(true), "table-wrapper table-wrapper--busy");
        assert_eq!(wrapper_class(false), "table-wrapper");
    }
}
