pub mod state;

use crate::domain::a001_article::api;
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::api_client::ApiClient;
use crate::shared::components::{
    Badge, BadgeSize, BadgeVariant, Column, ConfirmationModal, DataTable, FilterButton, FilterDrawer,
    PageHeader, SelectField, TextField,
};
use crate::shared::icons::{icon, Icon};
use crate::shared::list_fetcher::use_list_fetcher;
use crate::shared::mutation::Mutation;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_money;
use crate::shared::table_state::TableState;
use crate::system::config::use_config;
use contracts::domain::a001_article::aggregate::Article;
use leptos::prelude::*;
use thaw::*;

const COLUMNS: [Column; 7] = [
    Column::sortable("article_no", "Article No"),
    Column::sortable("season", "Season"),
    Column::sortable("size", "Size"),
    Column::sortable("category", "Category"),
    Column::sortable("total_cost", "Cost").right(),
    Column::sortable("sales_rate", "Sales Rate").right(),
    Column::plain("actions", ""),
];

#[component]
#[allow(non_snake_case)]
pub fn ArticlesPage() -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();
    let config = use_config();
    let ctx = use_app_context();

    let table = state::create_state();
    let list = use_list_fetcher(table, "Failed to load articles", move |query| {
        api::fetch_articles(client, query)
    });

    let drawer_open = RwSignal::new(false);
    let pending_delete = RwSignal::new(None::<Article>);
    let deleting = RwSignal::new(false);

    let temp = move |key: &'static str| {
        Signal::derive(move || table.with(|t| t.temp_filters().get(key).unwrap_or_default().to_string()))
    };
    let set_temp = move |key: &'static str| {
        Callback::new(move |value: String| {
            table.update(|t| {
                t.set_temp_filter(key, value);
            })
        })
    };

    let seasons = Signal::derive(move || config.options().seasons);
    let categories = Signal::derive(move || config.options().categories);

    let confirm_delete = Callback::new(move |_| {
        let Some(article) = pending_delete.get_untracked() else {
            return;
        };
        Mutation::new(notifier, "Deleted successfully", "Error deleting")
            .with_busy(deleting)
            .run(api::delete_article(client, article.id), move |_| {
                pending_delete.set(None);
                list.reload();
            });
    });

    view! {
        <div class="page">
            <PageHeader title="Articles" subtitle="Production catalogue with costing".to_string()>
                <FilterButton table=table open=drawer_open />
                <Button appearance=ButtonAppearance::Primary on_click=move |_| ctx.navigate(Page::NewArticle)>
                    {icon(Icon::Plus)}
                    " New Article"
                </Button>
            </PageHeader>

            <DataTable
                table=table
                columns=COLUMNS.to_vec()
                loading=list.loading
                row_count=Signal::derive(move || list.rows.with(Vec::len))
            >
                <For
                    each=move || list.rows.get()
                    key=|article| (article.id.clone(), article.article_no.clone(), article.sales_rate.to_bits(), article.total_cost.to_bits())
                    children=move |article: Article| {
                        let view_id = article.id.clone();
                        let edit_id = article.id.clone();
                        let for_delete = article.clone();
                        let short_code = article.short_code();
                        let article_no = article.article_no.clone();
                        let season = article.season.clone();
                        let size = article.size.clone();
                        let category = article.category.clone();
                        let total_cost = article.total_cost;
                        let sales_rate = article.sales_rate;
                        view! {
                            <TableRow>
                                <TableCell>
                                    <div class="article-cell">
                                        <span class="article-cell__code">{short_code}</span>
                                        <span class="article-cell__no">{article_no}</span>
                                    </div>
                                </TableCell>
                                <TableCell>{season}</TableCell>
                                <TableCell>{size}</TableCell>
                                <TableCell>
                                    <Badge variant=BadgeVariant::Info size=BadgeSize::Sm>
                                        {category}
                                    </Badge>
                                </TableCell>
                                <TableCell class="text-right">{format_money(total_cost)}</TableCell>
                                <TableCell class="text-right">{format_money(sales_rate)}</TableCell>
                                <TableCell>
                                    <div class="row-actions">
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| ctx.navigate(Page::ArticleSheet(view_id.clone()))
                                        >
                                            {icon(Icon::Eye)}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| ctx.navigate(Page::EditArticle(edit_id.clone()))
                                        >
                                            {icon(Icon::Edit)}
                                        </Button>
                                        <Button
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| pending_delete.set(Some(for_delete.clone()))
                                        >
                                            {icon(Icon::Trash)}
                                        </Button>
                                    </div>
                                </TableCell>
                            </TableRow>
                        }
                    }
                />
            </DataTable>

            <FilterDrawer
                open=drawer_open
                on_apply=Callback::new(move |_| table.update(TableState::apply_filters))
                on_clear=Callback::new(move |_| table.update(TableState::reset_filters))
                title="Filter Articles"
            >
                <TextField
                    label="Search"
                    value=temp("search")
                    on_input=set_temp("search")
                    placeholder="Article no. or description"
                />
                <SelectField
                    label="Season"
                    value=temp("season")
                    on_change=set_temp("season")
                    options=seasons
                    placeholder="All seasons"
                />
                <SelectField
                    label="Category"
                    value=temp("category")
                    on_change=set_temp("category")
                    options=categories
                    placeholder="All categories"
                />
                <TextField
                    label="Fabric Type"
                    value=temp("fabric_type")
                    on_input=set_temp("fabric_type")
                    placeholder="e.g. Lawn"
                />
            </FilterDrawer>

            <ConfirmationModal
                open=Signal::derive(move || pending_delete.with(Option::is_some))
                title="Delete Article"
                message=Signal::derive(move || {
                    pending_delete.with(|a| match a {
                        Some(a) => format!("Delete {}? Are you sure? This cannot be undone.", a.article_no),
                        None => String::new(),
                    })
                })
                on_confirm=confirm_delete
                on_close=Callback::new(move |_| pending_delete.set(None))
                busy=deleting
            />
        </div>
    }
}
