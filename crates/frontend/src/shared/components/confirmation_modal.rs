use crate::shared::modal::Modal;
use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog guarding destructive actions.
#[component]
pub fn ConfirmationModal(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] message: Signal<String>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
    #[prop(optional, into)] busy: Signal<bool>,
    #[prop(optional, into)] confirm_label: Option<String>,
) -> impl IntoView {
    let confirm_label = confirm_label.unwrap_or_else(|| "Delete".to_string());
    let title = StoredValue::new(title);
    let confirm_label = StoredValue::new(confirm_label);

    view! {
        <Show when=move || open.get()>
            <Modal
                title=Signal::derive(move || title.get_value())
                on_close=on_close
                footer=move || {
                    view! {
                        <Flex gap=FlexGap::Small justify=FlexJustify::End>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| on_close.run(())
                                disabled=busy
                            >
                                "Cancel"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=move |_| on_confirm.run(())
                                disabled=busy
                            >
                                {confirm_label.get_value()}
                            </Button>
                        </Flex>
                    }
                }
            >
                <p class="confirmation-message">{move || message.get()}</p>
            </Modal>
        </Show>
    }
}
