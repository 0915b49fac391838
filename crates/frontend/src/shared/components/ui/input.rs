use super::FieldLabel;
use leptos::prelude::*;

/// Single-line text or number field.
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    /// "text" (default), "number", "password"
    #[prop(optional, into)]
    input_type: Option<&'static str>,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let input_type = input_type.unwrap_or("text");
    let step = (input_type == "number").then_some("any");

    view! {
        <div class="form__group">
            <FieldLabel label=label required=required />
            <input
                class="form__input"
                type=input_type
                step=step
                prop:value=move || value.get()
                placeholder=move || placeholder.get().unwrap_or_default()
                disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
