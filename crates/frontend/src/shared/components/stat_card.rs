use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

/// Headline figure on the dashboard.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    icon_kind: Icon,
    /// `None` while loading
    #[prop(into)]
    value: Signal<Option<String>>,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_kind)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "…".to_string())}
                </div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
