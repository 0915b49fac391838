//! Read-only costing sheet of one article.

use crate::domain::a001_article::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::api_client::ApiClient;
use crate::shared::components::{Badge, BadgeSize, BadgeVariant, ConfirmationModal, PageHeader};
use crate::shared::date_utils::format_date_opt;
use crate::shared::icons::{icon, Icon};
use crate::shared::mutation::{failure_message, Mutation};
use crate::shared::notify::use_notifier;
use crate::shared::number_format::{format_money, format_percent};
use crate::system::config::use_config;
use contracts::domain::a001_article::aggregate::Article;
use contracts::domain::a001_article::costing::{group_by_category, CostSummary};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Tile colour of the margin: red on a loss, amber when thin.
pub fn margin_variant(summary: &CostSummary) -> BadgeVariant {
    if summary.is_loss() {
        BadgeVariant::Danger
    } else if summary.margin_percent < 15.0 {
        BadgeVariant::Warning
    } else {
        BadgeVariant::Success
    }
}

#[component]
pub fn MetricTile(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    icon_kind: Icon,
    #[prop(optional)] variant: BadgeVariant,
) -> impl IntoView {
    view! {
        <div class=format!("metric-tile {}", variant.class_name())>
            <div class="metric-tile__icon">{icon(icon_kind)}</div>
            <div class="metric-tile__label">{label}</div>
            <div class="metric-tile__value">{value}</div>
        </div>
    }
}

#[component]
pub fn ArticleSheet(id: String) -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();
    let config = use_config();
    let ctx = use_app_context();

    let article = RwSignal::new(None::<Article>);
    let confirm_open = RwSignal::new(false);
    let deleting = RwSignal::new(false);
    let id = StoredValue::new(id);

    spawn_local(async move {
        match api::fetch_article(client, id.get_value()).await {
            Ok(a) => article.set(Some(a)),
            Err(err) => {
                if let Some(message) = failure_message(&err, "Failed to load article") {
                    notifier.error(message);
                }
                ctx.navigate(Page::Articles);
            }
        }
    });

    let confirm_delete = Callback::new(move |_| {
        Mutation::new(notifier, "Article deleted successfully", "Failed to delete article")
            .with_busy(deleting)
            .run(api::delete_article(client, id.get_value()), move |_| {
                confirm_open.set(false);
                ctx.navigate(Page::Articles);
            });
    });

    view! {
        <div class="page">
            {move || match article.get() {
                None => view! { <div class="page-loader"><Spinner /></div> }.into_any(),
                Some(a) => {
                    let summary = CostSummary::from_total(a.total_cost, a.sales_rate);
                    let groups = config.with_options(|c| group_by_category(&a.rates, &c.rate_categories.names()));
                    let subtitle = format!("{} / {} / {}", a.season, a.size, a.fabric_type);
                    view! {
                        <PageHeader title=a.article_no.clone() subtitle=subtitle>
                            <Button appearance=ButtonAppearance::Subtle on_click=move |_| ctx.navigate(Page::Articles)>
                                {icon(Icon::ArrowLeft)}
                                " Back"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| ctx.navigate(Page::EditArticle(id.get_value()))
                            >
                                {icon(Icon::Edit)}
                                " Edit"
                            </Button>
                            <Button appearance=ButtonAppearance::Secondary on_click=move |_| confirm_open.set(true)>
                                {icon(Icon::Trash)}
                                " Delete"
                            </Button>
                        </PageHeader>

                        <div class="metric-row">
                            <MetricTile label="Cost Price" value=format_money(summary.total_cost) icon_kind=Icon::Wallet />
                            <MetricTile label="Retail Price" value=format_money(summary.sales_rate) icon_kind=Icon::Articles />
                            <MetricTile
                                label="Profit Margin"
                                value=format_percent(summary.margin_rounded())
                                icon_kind=if summary.is_loss() { Icon::TrendingDown } else { Icon::TrendingUp }
                                variant=margin_variant(&summary)
                            />
                        </div>

                        <div class="sheet-grid">
                            <section class="sheet-card">
                                <h3 class="sheet-card__title">"Details"</h3>
                                <dl class="review-list">
                                    <dt>"Category"</dt>
                                    <dd><Badge variant=BadgeVariant::Info size=BadgeSize::Sm>{a.category.clone()}</Badge></dd>
                                    <dt>"Quantity"</dt>
                                    <dd>{a.quantity.map(|q| q.to_string()).unwrap_or_else(|| "-".to_string())}</dd>
                                    <dt>"Profit"</dt>
                                    <dd>{format_money(summary.profit)}</dd>
                                    <dt>"Created"</dt>
                                    <dd>{format_date_opt(a.created_at.as_deref())}</dd>
                                </dl>
                                {a.description.clone().filter(|d| !d.trim().is_empty()).map(|d| view! {
                                    <p class="sheet-card__description">{d}</p>
                                })}
                            </section>

                            <section class="sheet-card">
                                <h3 class="sheet-card__title">"Costing Breakdown"</h3>
                                {groups
                                    .into_iter()
                                    .map(|group| {
                                        let empty = group.lines.is_empty();
                                        view! {
                                            <div class="cost-group">
                                                <div class="cost-group__head">
                                                    <span class="cost-group__name">{group.category}</span>
                                                    <span class="cost-group__subtotal">{format_money(group.subtotal)}</span>
                                                </div>
                                                {if empty {
                                                    view! { <div class="cost-group__empty">"No entries"</div> }.into_any()
                                                } else {
                                                    group
                                                        .lines
                                                        .into_iter()
                                                        .map(|line| view! {
                                                            <div class="cost-group__line">
                                                                <span>{line.title}</span>
                                                                <span>{format_money(line.price)}</span>
                                                            </div>
                                                        })
                                                        .collect_view()
                                                        .into_any()
                                                }}
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                                <div class="cost-group__total">
                                    <span>"Total"</span>
                                    <span>{format_money(summary.total_cost)}</span>
                                </div>
                            </section>
                        </div>
                    }
                    .into_any()
                }
            }}

            <ConfirmationModal
                open=confirm_open
                title="Delete Article"
                message=Signal::derive(|| "Are you sure? This cannot be undone.".to_string())
                on_confirm=confirm_delete
                on_close=Callback::new(move |_| confirm_open.set(false))
                busy=deleting
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_margin_variant() {
        assert_eq!(margin_variant(&CostSummary::from_total(600.0, 500.0)), BadgeVariant::Danger);
        assert_eq!(margin_variant(&CostSummary::from_total(450.0, 500.0)), BadgeVariant::Warning);
        assert_eq!(margin_variant(&CostSummary::from_total(300.0, 500.0)), BadgeVariant::Success);
    }
}
