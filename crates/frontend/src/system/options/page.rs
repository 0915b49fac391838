use crate::shared::api_client::ApiClient;
use crate::shared::components::{ConfirmationModal, PageHeader};
use crate::shared::icons::{icon, Icon};
use crate::shared::list_utils::matches_search;
use crate::shared::modal::Modal;
use crate::shared::mutation::{failure_message, Mutation};
use crate::shared::notify::use_notifier;
use crate::system::config::api;
use crate::system::config::use_config;
use contracts::system::config::{OptionAction, OptionList, OptionMutation, OptionsCatalog};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Entries matching the search, paired with their position in the full list.
pub fn filter_entries(values: &[String], search: &str) -> Vec<(usize, String)> {
    values
        .iter()
        .enumerate()
        .filter(|(_, v)| matches_search(v, search))
        .map(|(i, v)| (i, v.clone()))
        .collect()
}

/// Target of the add/edit form or the delete confirmation.
#[derive(Debug, Clone, PartialEq)]
struct OptionTarget {
    list: OptionList,
    index: Option<usize>,
}

impl OptionTarget {
    fn action(&self) -> OptionAction {
        if self.index.is_some() {
            OptionAction::Update
        } else {
            OptionAction::Add
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn OptionsPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();
    let config = use_config();

    let catalog = RwSignal::new(OptionsCatalog::default());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let editor = RwSignal::new(None::<OptionTarget>);
    let form_value = RwSignal::new(String::new());
    let pending_delete = RwSignal::new(None::<OptionTarget>);
    let busy = RwSignal::new(false);

    let load = move || {
        spawn_local(async move {
            match api::fetch_options(client).await {
                Ok(options) => catalog.set(options),
                Err(err) => {
                    if let Some(message) = failure_message(&err, "Failed to sync system parameters") {
                        notifier.error(message);
                    }
                }
            }
            loading.set(false);
        });
    };
    load();

    let submit = move |target: OptionTarget, action: OptionAction| {
        let mutation = OptionMutation::new(&target.list, action, &form_value.get_untracked(), target.index);
        if let Err(message) = mutation.validate() {
            notifier.warn(message);
            return;
        }
        Mutation::new(
            notifier,
            format!("Parameter {}", action.past_tense()),
            "Operation failed",
        )
        .with_busy(busy)
        .run(api::update_options(client, target.list, mutation), move |_| {
            editor.set(None);
            pending_delete.set(None);
            form_value.set(String::new());
            load();
            config.refresh_options();
        });
    };

    let open_add = move |list: OptionList| {
        form_value.set(String::new());
        editor.set(Some(OptionTarget { list, index: None }));
    };
    let open_edit = move |list: OptionList, index: usize, value: String| {
        form_value.set(value);
        editor.set(Some(OptionTarget { list, index: Some(index) }));
    };

    view! {
        <div class="page">
            <PageHeader
                title="Global Configuration"
                subtitle="Define size scales, seasons and cost variables for the production line.".to_string()
            >
                <div class="search-box">
                    {icon(Icon::Search)}
                    <Input value=search placeholder="Search values..." />
                </div>
            </PageHeader>

            {move || {
                if loading.get() {
                    return view! { <div class="page-loader"><Spinner /></div> }.into_any();
                }
                let lists = catalog.with(OptionsCatalog::lists);
                view! {
                    <div class="card-grid card-grid--wide">
                        {lists
                            .into_iter()
                            .map(|list| {
                                let label = list.label();
                                let list_for_add = list.clone();
                                let list_for_rows = list.clone();
                                let entries = Memo::new(move |_| {
                                    let term = search.get();
                                    catalog.with(|c| filter_entries(c.values(&list_for_rows), &term))
                                });
                                view! {
                                    <div class="option-card">
                                        <div class="option-card__header">
                                            <h3>{label}</h3>
                                            <Button
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| open_add(list_for_add.clone())
                                            >
                                                {icon(Icon::Plus)}
                                            </Button>
                                        </div>
                                        <div class="option-card__body">
                                            {move || {
                                                let rows = entries.get();
                                                if rows.is_empty() {
                                                    return view! {
                                                        <div class="option-card__empty">"No matching entries"</div>
                                                    }
                                                    .into_any();
                                                }
                                                rows.into_iter()
                                                    .map(|(index, value)| {
                                                        let edit_list = list.clone();
                                                        let delete_list = list.clone();
                                                        let edit_value = value.clone();
                                                        view! {
                                                            <div class="option-row">
                                                                <span class="option-row__value">{value}</span>
                                                                <span class="option-row__actions">
                                                                    <button
                                                                        class="button button--icon"
                                                                        on:click=move |_| open_edit(edit_list.clone(), index, edit_value.clone())
                                                                    >
                                                                        {icon(Icon::Edit)}
                                                                    </button>
                                                                    <button
                                                                        class="button button--icon"
                                                                        on:click=move |_| pending_delete.set(Some(OptionTarget {
                                                                            list: delete_list.clone(),
                                                                            index: Some(index),
                                                                        }))
                                                                    >
                                                                        {icon(Icon::Trash)}
                                                                    </button>
                                                                </span>
                                                            </div>
                                                        }
                                                    })
                                                    .collect_view()
                                                    .into_any()
                                            }}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}

            {move || editor.get().map(|target| {
                let is_update = target.index.is_some();
                let title = format!("{} entry", target.list.label());
                let target = StoredValue::new(target);
                view! {
                    <Modal
                        title=title
                        on_close=Callback::new(move |_| editor.set(None))
                        footer=move || view! {
                            <Flex justify=FlexJustify::End>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=busy
                                    on_click=move |_| {
                                        let target = target.get_value();
                                        let action = target.action();
                                        submit(target, action);
                                    }
                                >
                                    {if is_update { "Update Parameter" } else { "Add Entry" }}
                                </Button>
                            </Flex>
                        }
                    >
                        <p class="hint">"Changes apply to every article form."</p>
                        <Input value=form_value placeholder="Value label..." />
                    </Modal>
                }
            })}

            <ConfirmationModal
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Parameter"
                message=Signal::derive(|| {
                    "Are you sure you want to remove this item? Articles using this value keep it.".to_string()
                })
                on_confirm=Callback::new(move |_| {
                    if let Some(target) = pending_delete.get_untracked() {
                        submit(target, OptionAction::Delete);
                    }
                })
                on_close=Callback::new(move |_| pending_delete.set(None))
                busy=busy
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_entries_keeps_original_index() {
        let values = vec!["Summer".to_string(), "Winter".to_string(), "Summer Lawn".to_string()];
        let filtered = filter_entries(&values, "summer");
        assert_eq!(filtered, vec![(0, "Summer".to_string()), (2, "Summer Lawn".to_string())]);
        assert_eq!(filter_entries(&values, "").len(), 3);
    }

    #[test]
    fn test_target_action() {
        let add = OptionTarget { list: OptionList::Sizes, index: None };
        let edit = OptionTarget { list: OptionList::Sizes, index: Some(1) };
        assert_eq!(add.action(), OptionAction::Add);
        assert_eq!(edit.action(), OptionAction::Update);
    }
}
