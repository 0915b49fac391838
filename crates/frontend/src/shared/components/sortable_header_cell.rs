use crate::shared::list_utils::{sort_class, sort_indicator};
use crate::shared::table_state::TableState;
use leptos::prelude::*;
use thaw::*;

/// Header cell that toggles the table's sort on click.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    column: &'static str,
    table: RwSignal<TableState>,
    #[prop(optional)] align_right: bool,
) -> impl IntoView {
    let header_style = if align_right {
        "cursor: pointer; justify-content: flex-end;"
    } else {
        "cursor: pointer;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| table.update(|t| t.handle_sort(column))
            >
                {label}
                <span class=move || table.with(|t| sort_class(t.sort(), column))>
                    {move || table.with(|t| sort_indicator(t.sort(), column))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
