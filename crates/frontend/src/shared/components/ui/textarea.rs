use super::FieldLabel;
use leptos::prelude::*;

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(optional)] rows: Option<u32>,
) -> impl IntoView {
    let rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            <FieldLabel label=label required=false />
            <textarea
                class="form__textarea"
                rows=rows
                placeholder=move || placeholder.get().unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
