use super::view_model::{rate_category_choices, ArticleDetailsViewModel, ArticleForm, WizardStep};
use crate::layout::global_context::{use_app_context, Page};
use crate::shared::api_client::ApiClient;
use crate::shared::components::{Badge, BadgeSize, BadgeVariant, PageHeader, SelectField, TextAreaField, TextField};
use crate::shared::icons::{icon, Icon};
use crate::shared::notify::use_notifier;
use crate::shared::number_format::{format_money, format_percent};
use crate::system::config::use_config;
use contracts::domain::a001_article::costing::group_by_category;
use leptos::ev;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

fn enter_is_local(event: &ev::KeyboardEvent) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_some_and(|el| {
            let tag = el.tag_name();
            tag.eq_ignore_ascii_case("textarea") || tag.eq_ignore_ascii_case("button")
        })
}

#[component]
pub fn ArticleDetails(#[prop(optional)] id: Option<String>) -> impl IntoView {
    let client = use_context::<ApiClient>().expect("ApiClient not found in context");
    let notifier = use_notifier();
    let config = use_config();
    let ctx = use_app_context();

    let vm = ArticleDetailsViewModel::new(id);
    vm.load_if_needed(client, notifier);

    let handle = window_event_listener(ev::keydown, move |event| {
        vm.handle_key(&event.key(), enter_is_local(&event));
    });
    on_cleanup(move || handle.remove());

    let field = move |get: fn(&ArticleForm) -> String| Signal::derive(move || vm.form.with(get));
    let setter = move |set: fn(&mut ArticleForm, String)| {
        Callback::new(move |value: String| vm.form.update(|f| set(f, value)))
    };

    let seasons = Signal::derive(move || config.options().seasons);
    let sizes = Signal::derive(move || config.options().sizes);
    let categories = Signal::derive(move || config.options().categories);
    let rate_categories = Signal::derive(move || config.with_options(rate_category_choices));
    let draft_titles = Signal::derive(move || {
        let category = vm.draft.with(|d| d.category.clone());
        config.with_options(|c| c.rate_categories.titles(&category).to_vec())
    });

    let summary = Memo::new(move |_| vm.form.with(ArticleForm::summary));
    let on_saved = Callback::new(move |_| ctx.navigate(Page::Articles));
    let cancel = move |_: ev::MouseEvent| ctx.navigate(Page::Articles);

    let title = if vm.is_edit_mode() { "Edit Article" } else { "New Article" };

    let general_step = move || {
        view! {
            <div class="form-grid">
                <TextField
                    label="Article No."
                    value=field(|f| f.article_no.clone())
                    on_input=setter(|f, v| f.article_no = v)
                    placeholder="e.g. AR-1042"
                    required=true
                />
                <SelectField
                    label="Season"
                    value=field(|f| f.season.clone())
                    on_change=setter(|f, v| f.season = v)
                    options=seasons
                    required=true
                />
                <SelectField
                    label="Size"
                    value=field(|f| f.size.clone())
                    on_change=setter(|f, v| f.size = v)
                    options=sizes
                    required=true
                />
                <SelectField
                    label="Category"
                    value=field(|f| f.category.clone())
                    on_change=setter(|f, v| f.category = v)
                    options=categories
                    required=true
                />
                <TextField
                    label="Fabric Type"
                    value=field(|f| f.fabric_type.clone())
                    on_input=setter(|f, v| f.fabric_type = v)
                    placeholder="e.g. Lawn"
                    required=true
                />
                <TextField
                    label="Quantity"
                    value=field(|f| f.quantity.clone())
                    on_input=setter(|f, v| f.quantity = v)
                    input_type="number"
                />
            </div>
            <TextAreaField
                label="Description"
                value=field(|f| f.description.clone())
                on_input=setter(|f, v| f.description = v)
                placeholder="Notes for the production floor"
            />
        }
    };

    let costing_step = move || {
        view! {
            <TextField
                label="Sales Rate"
                value=field(|f| f.sales_rate.clone())
                on_input=setter(|f, v| f.sales_rate = v)
                input_type="number"
                required=true
            />

            <div class="rate-builder">
                <SelectField
                    label="Cost Type"
                    value=Signal::derive(move || vm.draft.with(|d| d.category.clone()))
                    on_change=Callback::new(move |v| vm.set_draft_category(v))
                    options=rate_categories
                />
                {move || {
                    let title = Signal::derive(move || vm.draft.with(|d| d.title.clone()));
                    let set_title = Callback::new(move |v: String| vm.draft.update(|d| d.title = v));
                    if draft_titles.with(Vec::is_empty) {
                        view! { <TextField label="Title" value=title on_input=set_title placeholder="e.g. Embroidery" /> }
                            .into_any()
                    } else {
                        view! { <SelectField label="Title" value=title on_change=set_title options=draft_titles /> }
                            .into_any()
                    }
                }}
                <TextField
                    label="Price"
                    value=Signal::derive(move || vm.draft.with(|d| d.price.clone()))
                    on_input=Callback::new(move |v: String| vm.draft.update(|d| d.price = v))
                    input_type="number"
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.add_rate(notifier)>
                    {icon(Icon::Plus)}
                    " Add"
                </Button>
            </div>

            <div class="rate-lines">
                {move || {
                    let rates = vm.form.with(|f| f.rates.clone());
                    if rates.is_empty() {
                        return view! { <div class="rate-lines__empty">"No cost lines yet"</div> }.into_any();
                    }
                    rates
                        .into_iter()
                        .enumerate()
                        .map(|(index, line)| {
                            view! {
                                <div class="rate-line">
                                    <Badge variant=BadgeVariant::Default size=BadgeSize::Sm>{line.category}</Badge>
                                    <span class="rate-line__title">{line.title}</span>
                                    <span class="rate-line__price">{format_money(line.price)}</span>
                                    <button class="button button--icon" on:click=move |_| vm.remove_rate(index)>
                                        {icon(Icon::Trash)}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        }
    };

    let review_step = move || {
        let form = vm.form.get();
        let groups = config.with_options(|c| group_by_category(&form.rates, &c.rate_categories.names()));
        let quantity = if form.quantity.trim().is_empty() { "-".to_string() } else { form.quantity.clone() };
        view! {
            <dl class="review-list">
                <dt>"Article No."</dt><dd>{form.article_no.clone()}</dd>
                <dt>"Season"</dt><dd>{form.season.clone()}</dd>
                <dt>"Size"</dt><dd>{form.size.clone()}</dd>
                <dt>"Category"</dt><dd>{form.category.clone()}</dd>
                <dt>"Fabric Type"</dt><dd>{form.fabric_type.clone()}</dd>
                <dt>"Quantity"</dt><dd>{quantity}</dd>
                <dt>"Sales Rate"</dt><dd>{format_money(form.sales_rate_value())}</dd>
            </dl>
            <div class="review-groups">
                {groups
                    .into_iter()
                    .filter(|g| !g.lines.is_empty())
                    .map(|group| {
                        view! {
                            <div class="review-group">
                                <div class="review-group__head">
                                    <span>{group.category}</span>
                                    <span>{format_money(group.subtotal)}</span>
                                </div>
                                {group
                                    .lines
                                    .into_iter()
                                    .map(|line| view! {
                                        <div class="review-group__line">
                                            <span>{line.title}</span>
                                            <span>{format_money(line.price)}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        }
    };

    view! {
        <div class="page">
            <PageHeader title=title subtitle="Press Enter for the next step, Escape to go back".to_string()>
                <Button appearance=ButtonAppearance::Subtle on_click=cancel>
                    {icon(Icon::ArrowLeft)}
                    " Back to list"
                </Button>
            </PageHeader>

            <div class="wizard-steps">
                {WizardStep::ALL
                    .into_iter()
                    .map(|step| {
                        view! {
                            <button
                                class="wizard-step"
                                class:wizard-step--active=move || vm.step.get() == step
                                class:wizard-step--done=move || { vm.step.get().number() > step.number() }
                                on:click=move |_| vm.step.set(step)
                            >
                                <span class="wizard-step__number">{step.number()}</span>
                                <span class="wizard-step__label">{step.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <div class="page-loader"><Spinner /></div> }
            >
                <div class="wizard">
                    <div class="wizard__body">
                        {move || match vm.step.get() {
                            WizardStep::General => general_step().into_any(),
                            WizardStep::Costing => costing_step().into_any(),
                            WizardStep::Review => review_step().into_any(),
                        }}

                        <div class="wizard__footer">
                            <Flex gap=FlexGap::Small justify=FlexJustify::End>
                                {move || match vm.step.get().previous() {
                                    Some(_) => view! {
                                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.go_back()>
                                            {icon(Icon::ChevronLeft)}
                                            " Back"
                                        </Button>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <Button appearance=ButtonAppearance::Secondary on_click=cancel>
                                            "Cancel"
                                        </Button>
                                    }
                                    .into_any(),
                                }}
                                {move || match vm.step.get().next() {
                                    Some(_) => view! {
                                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.go_next()>
                                            "Next "
                                            {icon(Icon::ChevronRight)}
                                        </Button>
                                    }
                                    .into_any(),
                                    None => view! {
                                        <Button
                                            appearance=ButtonAppearance::Primary
                                            disabled=vm.saving
                                            on_click=move |_| vm.save_command(client, notifier, on_saved)
                                        >
                                            {icon(Icon::Check)}
                                            {if vm.is_edit_mode() { " Update Article" } else { " Create Article" }}
                                        </Button>
                                    }
                                    .into_any(),
                                }}
                            </Flex>
                        </div>
                    </div>

                    <aside class="cost-summary">
                        <h3 class="cost-summary__title">"Cost Summary"</h3>
                        <div class="cost-summary__row">
                            <span>"Total Cost"</span>
                            <span>{move || format_money(summary.get().total_cost)}</span>
                        </div>
                        <div class="cost-summary__row">
                            <span>"Sales Rate"</span>
                            <span>{move || format_money(summary.get().sales_rate)}</span>
                        </div>
                        <div class="cost-summary__row" class:cost-summary__row--loss=move || summary.get().is_loss()>
                            <span>"Profit"</span>
                            <span>{move || format_money(summary.get().profit)}</span>
                        </div>
                        <div class="cost-summary__row">
                            <span>"Margin"</span>
                            {move || {
                                let s = summary.get();
                                let variant = if s.is_loss() { BadgeVariant::Danger } else { BadgeVariant::Success };
                                view! {
                                    <Badge variant=variant size=BadgeSize::Sm>
                                        {format_percent(s.margin_rounded())}
                                    </Badge>
                                }
                            }}
                        </div>
                    </aside>
                </div>
            </Show>
        </div>
    }
}
