use crate::dashboards::d001_overview::api;
use crate::domain::a001_article::api as articles;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::api_client::ApiClient;
use crate::shared::components::{Badge, BadgeSize, BadgeVariant, EmptyState, PageHeader, StatCard};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::{icon, Icon};
use crate::shared::mutation::failure_message;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::{format_money, format_percent};
use crate::system::config::use_config;
use contracts::domain::a001_article::aggregate::{Article, ArticleStats};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Landing page: catalogue totals, newest articles and team size.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();
    let config = use_config();
    let ctx = use_app_context();

    let stats = RwSignal::new(None::<ArticleStats>);
    let recent = RwSignal::new(Vec::<Article>::new());
    let loading = RwSignal::new(true);
    let active_members = RwSignal::new(None::<usize>);

    spawn_local(async move {
        match articles::fetch_stats(client).await {
            Ok(s) => stats.set(Some(s)),
            Err(err) => {
                if let Some(message) = failure_message(&err, "Failed to load statistics") {
                    notifier.error(message);
                }
            }
        }
        match api::fetch_recent_articles(client).await {
            Ok(rows) => recent.set(rows),
            Err(err) => log::warn!("recent articles failed: {}", err),
        }
        loading.set(false);
    });

    // Member count is only visible to roles that manage the team; the role
    // arrives after /auth/me, so wait for it.
    Effect::new(move |_| {
        if !ctx.can_manage_team() || active_members.get_untracked().is_some() {
            return;
        }
        spawn_local(async move {
            match api::fetch_active_member_count(client).await {
                Ok(count) => active_members.set(Some(count)),
                Err(err) => log::warn!("member count failed: {}", err),
            }
        });
    });

    let total_articles = Signal::derive(move || stats.get().map(|s| s.total_articles.to_string()));
    let avg_margin = Signal::derive(move || stats.get().map(|s| format_percent(s.summary.avg_profit_margin)));
    let members = Signal::derive(move || active_members.get().map(|n| n.to_string()));

    view! {
        <div class="page">
            <PageHeader
                title="Dashboard"
                subtitle=Signal::derive(move || Some(format!("{} production overview", config.company_name())))
            >
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::NewArticle)>
                    {icon(Icon::Plus)}
                    " New Article"
                </Button>
            </PageHeader>

            <div class="stat-row">
                <StatCard label="Articles" icon_kind=Icon::Articles value=total_articles />
                <StatCard
                    label="Avg. Profit Margin"
                    icon_kind=Icon::TrendingUp
                    value=avg_margin
                    subtitle="Across all articles".to_string()
                />
                <Show when=move || ctx.can_manage_team()>
                    <StatCard label="Active Members" icon_kind=Icon::Users value=members />
                </Show>
            </div>

            <section class="dashboard-section">
                <div class="dashboard-section__head">
                    <h2>"Recent Articles"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.navigate(Page::Articles)>
                        "View all "
                        {icon(Icon::ArrowRight)}
                    </Button>
                </div>
                {move || {
                    if loading.get() {
                        return view! { <div class="page-loader"><Spinner /></div> }.into_any();
                    }
                    let rows = recent.get();
                    if rows.is_empty() {
                        return view! { <div class="empty-card"><EmptyState is_filtering=false /></div> }.into_any();
                    }
                    view! {
                        <div class="recent-grid">
                            {rows
                                .into_iter()
                                .map(|article| {
                                    let id = article.id.clone();
                                    view! {
                                        <button
                                            class="recent-card"
                                            on:click=move |_| ctx.navigate(Page::ArticleSheet(id.clone()))
                                        >
                                            <div class="recent-card__code">{article.short_code()}</div>
                                            <div class="recent-card__body">
                                                <div class="recent-card__title">{article.article_no.clone()}</div>
                                                <div class="recent-card__meta">
                                                    <Badge variant=BadgeVariant::Info size=BadgeSize::Sm>
                                                        {article.category.clone()}
                                                    </Badge>
                                                    <span>{format_date_opt(article.created_at.as_deref())}</span>
                                                </div>
                                            </div>
                                            <div class="recent-card__price">{format_money(article.sales_rate)}</div>
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }}
            </section>
        </div>
    }
}
