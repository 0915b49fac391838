//! Full-screen views shown instead of the shell.

use crate::shared::icons::{icon, Icon};
use crate::system::config::use_config;
use crate::system::session::LOGIN_PATH;
use leptos::prelude::*;

/// Shown when `/config` or `/options` answered 403 or the expiry date passed.
#[component]
pub fn ExpiredView() -> impl IntoView {
    let config = use_config();
    let contact = move || config.config().unwrap_or_default();

    view! {
        <div class="boundary">
            <div class="boundary__card">
                <div class="boundary__icon">{icon(Icon::Lock)}</div>
                <h1>"Subscription Expired"</h1>
                <p>
                    "Access to "
                    <strong>{move || config.company_name()}</strong>
                    " is paused. Renew the subscription to continue."
                </p>
                <dl class="boundary__contact">
                    {move || contact().company_phone.map(|phone| view! { <dt>"Phone"</dt><dd>{phone}</dd> })}
                    {move || contact().company_email.map(|email| view! { <dt>"Email"</dt><dd>{email}</dd> })}
                    {move || contact().company_address.map(|address| view! { <dt>"Address"</dt><dd>{address}</dd> })}
                </dl>
            </div>
        </div>
    }
}

#[component]
pub fn SignedOutView() -> impl IntoView {
    view! {
        <div class="boundary">
            <div class="boundary__card">
                <div class="boundary__icon">{icon(Icon::Lock)}</div>
                <h1>"Signed out"</h1>
                <p>"Your session has ended."</p>
                <a class="button button--primary" href=LOGIN_PATH>"Sign in"</a>
            </div>
        </div>
    }
}
