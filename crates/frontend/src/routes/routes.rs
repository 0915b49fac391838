use crate::layout::boundary::{ExpiredView, SignedOutView};
use crate::layout::center::Center;
use crate::layout::global_context::use_app_context;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::api_client::ApiClient;
use crate::shared::mutation::failure_message;
use crate::shared::notify::use_notifier;
use crate::system::config::use_config;
use crate::system::session::use_session;
use crate::system::users::api;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
fn MainLayout() -> impl IntoView {
    let ctx = use_app_context();
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();

    ctx.init_router_integration();

    spawn_local(async move {
        match api::fetch_current_user(client).await {
            Ok(user) => ctx.current_user.set(Some(user)),
            Err(err) => {
                if let Some(message) = failure_message(&err, "Failed to load your profile") {
                    notifier.error(message);
                }
            }
        }
    });

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Center /> }.into_any()
        />
    }
}

/// Session boundary, then subscription boundary, then the dashboard.
#[component]
pub fn AppRoutes() -> impl IntoView {
    let session = use_session();
    let config = use_config();

    view! {
        <Show when=move || session.is_signed_in() fallback=|| view! { <SignedOutView /> }>
            {move || {
                if config.loading() {
                    view! { <div class="page-loader page-loader--full"><thaw::Spinner /></div> }.into_any()
                } else if config.is_expired() {
                    view! { <ExpiredView /> }.into_any()
                } else {
                    view! { <MainLayout /> }.into_any()
                }
            }}
        </Show>
    }
}
