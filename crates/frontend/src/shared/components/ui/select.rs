use super::FieldLabel;
use leptos::prelude::*;

/// Native select over plain string values.
///
/// A value that is not among `options` (an entry removed from the catalog
/// after the article was saved) is still listed so it is not silently lost.
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(into)] options: Signal<Vec<String>>,
    /// Text of the empty choice
    #[prop(optional, into)]
    placeholder: Option<String>,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Select...".to_string());
    let choices = move || with_current(options.get(), &value.get());

    view! {
        <div class="form__group">
            <FieldLabel label=label required=required />
            <select
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{placeholder}</option>
                {move || {
                    let current = value.get();
                    choices()
                        .into_iter()
                        .map(|choice| {
                            let selected = choice == current;
                            view! { <option value=choice.clone() selected=selected>{choice.clone()}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

fn with_current(mut options: Vec<String>, current: &str) -> Vec<String> {
    if !current.is_empty() && !options.iter().any(|o| o == current) {
        options.push(current.to_string());
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_value_kept() {
        let options = vec!["S".to_string(), "M".to_string()];
        assert_eq!(with_current(options.clone(), "M"), options);
        assert_eq!(with_current(options.clone(), "").len(), 2);
        assert_eq!(with_current(options, "XXL").last().map(String::as_str), Some("XXL"));
    }
}
