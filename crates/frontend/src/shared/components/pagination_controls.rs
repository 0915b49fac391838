use crate::shared::icons::{icon, Icon};
use crate::shared::table_state::{PageCommit, PageInput, TableState};
use leptos::prelude::*;

/// Previous / next buttons, a free page input and the row range label.
///
/// The input may be cleared while typing; nothing is committed until it
/// holds a number, which is then clamped into range.
#[component]
pub fn PaginationControls(table: RwSignal<TableState>) -> impl IntoView {
    let pagination = Memo::new(move |_| table.with(TableState::pagination));
    let draft = RwSignal::new(String::from("1"));

    Effect::new(move |_| {
        draft.set(pagination.get().page.to_string());
    });

    let commit = move |input: PageInput| {
        let outcome = table.try_update(|t| t.set_page(input));
        match outcome {
            Some(PageCommit::Committed(page)) => draft.set(page.to_string()),
            Some(PageCommit::Pending) => {}
            Some(PageCommit::NoPages) | None => {
                draft.set(pagination.get_untracked().page.to_string())
            }
        }
    };

    let on_input = move |ev| {
        let raw = event_target_value(&ev);
        match PageInput::parse(&raw) {
            Some(PageInput::Pending) => draft.set(String::new()),
            Some(input) => commit(input),
            None => draft.set(pagination.get_untracked().page.to_string()),
        }
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || pagination.get().range_label()}</span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(PageCommit::Committed(page)) = table.try_update(TableState::previous_page) {
                        draft.set(page.to_string());
                    }
                }
                disabled=move || !pagination.get().has_previous()
                title="Previous page"
            >
                {icon(Icon::ChevronLeft)}
            </button>
            <span class="pagination-page">
                "Page "
                <input
                    class="pagination-input"
                    type="text"
                    inputmode="numeric"
                    prop:value=move || draft.get()
                    on:input=on_input
                    on:blur=move |_| {
                        if draft.get_untracked().is_empty() {
                            draft.set(pagination.get_untracked().page.to_string());
                        }
                    }
                />
                {move || format!(" of {}", pagination.get().total_pages.max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if let Some(PageCommit::Committed(page)) = table.try_update(TableState::next_page) {
                        draft.set(page.to_string());
                    }
                }
                disabled=move || !pagination.get().has_next()
                title="Next page"
            >
                {icon(Icon::ChevronRight)}
            </button>
        </div>
    }
}
