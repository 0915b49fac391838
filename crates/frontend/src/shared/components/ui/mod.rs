//! Labelled native form controls for the article and filter forms.

pub mod input;
pub mod select;
pub mod textarea;

pub use input::TextField;
pub use select::SelectField;
pub use textarea::TextAreaField;

use leptos::prelude::*;

/// Label with the required marker used by every field.
#[component]
pub(crate) fn FieldLabel(label: String, required: bool) -> impl IntoView {
    view! {
        <label class="form__label">
            {label}
            {required.then(|| view! { <span class="form__required">" *"</span> })}
        </label>
    }
}
