//! Top bar: sidebar toggle, company name, signed-in member and sign-out.

use crate::layout::global_context::use_app_context;
use crate::shared::api_client::ApiClient;
use crate::shared::icons::{icon, Icon};
use crate::system::config::use_config;
use crate::system::session::use_session;
use crate::system::users::api;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let config = use_config();
    let session = use_session();
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");

    let logout = move |_| {
        spawn_local(async move {
            if let Err(err) = api::logout(client).await {
                log::warn!("logout request failed: {}", err);
            }
            session.end_and_redirect();
        });
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button class="top-header__icon-btn" on:click=move |_| ctx.toggle_left() title="Toggle navigation">
                    {icon(Icon::Dashboard)}
                </button>
                <span class="top-header__title">{move || config.company_name()}</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>
                        {move || ctx.current_user.with(|u| u.as_ref().map(|u| u.name.clone()).unwrap_or_default())}
                    </span>
                    {move || ctx.role().map(|role| view! { <span class="top-header__role">{role.label()}</span> })}
                </div>
                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon(Icon::Logout)}
                </button>
            </div>
        </div>
    }
}
