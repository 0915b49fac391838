use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::api_client::ApiClient;
use crate::shared::notify::{Notifier, ToastHost};
use crate::system::config::ConfigContext;
use crate::system::session::Session;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Session first: the client and the config loader both read the token.
    let session = Session::start_in_browser();
    let client = ApiClient::new(session);
    let config = ConfigContext::new(client, session);

    provide_context(session);
    provide_context(client);
    provide_context(Notifier::new());
    provide_context(config);
    provide_context(AppGlobalContext::new());

    config.load();

    view! {
        <AppRoutes />
        <ToastHost />
    }
}
