//! Content area: renders the page the navigation context points at.

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_article::ui::details::ArticleDetails;
use crate::domain::a001_article::ui::list::ArticlesPage;
use crate::domain::a001_article::ui::sheet::ArticleSheet;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::icons::{icon, Icon};
use crate::system::options::OptionsPage;
use crate::system::settings::SettingsPage;
use crate::system::users::ui::list::UsersPage;
use leptos::prelude::*;

fn render_page(page: Page, is_developer: Memo<bool>) -> AnyView {
    // Only restricted pages subscribe to the role, so the others are not
    // rebuilt when the profile arrives.
    if page.requires_developer() && !is_developer.get() {
        return view! {
            <div class="page page--restricted">
                {icon(Icon::Lock)}
                <h2>"Restricted"</h2>
                <p>"Only developer accounts can manage the team."</p>
            </div>
        }
        .into_any();
    }
    match page {
        Page::Dashboard => view! { <OverviewDashboard /> }.into_any(),
        Page::Articles => view! { <ArticlesPage /> }.into_any(),
        Page::NewArticle => view! { <ArticleDetails /> }.into_any(),
        Page::EditArticle(id) => view! { <ArticleDetails id=id /> }.into_any(),
        Page::ArticleSheet(id) => view! { <ArticleSheet id=id /> }.into_any(),
        Page::Users => view! { <UsersPage /> }.into_any(),
        Page::Options => view! { <OptionsPage /> }.into_any(),
        Page::Settings => view! { <SettingsPage /> }.into_any(),
    }
}

#[component]
pub fn Center() -> impl IntoView {
    let ctx = use_app_context();
    let page = Memo::new(move |_| ctx.page.get());
    let is_developer = Memo::new(move |_| ctx.is_developer());

    view! {
        <div data-zone="center" class="app-content">
            {move || render_page(page.get(), is_developer)}
        </div>
    }
}
