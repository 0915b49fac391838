use crate::shared::icons::{icon, Icon};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// Side panel holding the draft filter inputs.
///
/// "Apply Filters" commits the draft and closes the panel, "Clear All"
/// restores the initial filters. Closing without applying keeps the draft.
#[component]
pub fn FilterDrawer(
    open: RwSignal<bool>,
    on_apply: Callback<()>,
    on_clear: Callback<()>,
    #[prop(optional, into)] title: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let title = title.unwrap_or_else(|| "Filters".to_string());
    let title = StoredValue::new(title);
    let children = StoredValue::new(children);

    let apply = move |_| {
        on_apply.run(());
        open.set(false);
    };

    view! {
        <Show when=move || open.get()>
            {
                let handle = window_event_listener(ev::keydown, move |event| {
                    if event.key() == "Escape" {
                        open.set(false);
                    }
                });
                on_cleanup(move || handle.remove());

                view! {
                    <div class="drawer-overlay" on:click=move |_| open.set(false)>
                        <aside class="drawer" on:click=|e: ev::MouseEvent| e.stop_propagation()>
                            <div class="drawer__header">
                                <h3 class="drawer__title">{title.get_value()}</h3>
                                <button class="button button--icon" on:click=move |_| open.set(false)>
                                    {icon(Icon::Close)}
                                </button>
                            </div>
                            <div class="drawer__body">
                                {children.with_value(|children| children())}
                            </div>
                            <div class="drawer__footer">
                                <Flex gap=FlexGap::Small justify=FlexJustify::End>
                                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_clear.run(())>
                                        "Clear All"
                                    </Button>
                                    <Button appearance=ButtonAppearance::Primary on_click=apply>
                                        "Apply Filters"
                                    </Button>
                                </Flex>
                            </div>
                        </aside>
                    </div>
                }
            }
        </Show>
    }
}
