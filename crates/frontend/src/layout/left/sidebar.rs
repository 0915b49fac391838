use crate::layout::global_context::{use_app_context, Page};
use crate::shared::icons::{icon, Icon};
use leptos::prelude::*;

fn page_icon(page: &Page) -> Icon {
    match page {
        Page::Dashboard => Icon::Dashboard,
        Page::Articles | Page::NewArticle | Page::EditArticle(_) | Page::ArticleSheet(_) => Icon::Articles,
        Page::Users => Icon::Users,
        Page::Options => Icon::Options,
        Page::Settings => Icon::Settings,
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="app-sidebar__content">
            {Page::NAVIGATION
                .into_iter()
                .map(|page| {
                    let developer_only = page.requires_developer();
                    let kind = page_icon(&page);
                    let title = page.title();
                    let target = page.clone();
                    view! {
                        <Show when=move || !developer_only || ctx.is_developer()>
                            {
                                let active_page = page.clone();
                                let target = target.clone();
                                view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || ctx.page.with(|p| p.section() == active_page)
                                        on:click=move |_| ctx.navigate(target.clone())
                                    >
                                        {icon(kind)}
                                        <span class="app-sidebar__label">{title}</span>
                                    </div>
                                }
                            }
                        </Show>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_pages_share_icon() {
        assert_eq!(page_icon(&Page::EditArticle("1".into())), Icon::Articles);
        assert_eq!(page_icon(&Page::Options), Icon::Options);
    }
}
