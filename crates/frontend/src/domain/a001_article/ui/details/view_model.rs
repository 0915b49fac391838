use crate::domain::a001_article::api;
use crate::shared::api_client::ApiClient;
use crate::shared::mutation::{failure_message, Mutation};
use crate::shared::notify::Notifier;
use contracts::domain::a001_article::aggregate::{Article, ArticleDto, RateLine};
use contracts::domain::a001_article::costing::{CostSummary, DEFAULT_RATE_CATEGORIES};
use contracts::system::config::OptionsCatalog;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill all required fields marked with *";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    General,
    Costing,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 3] = [WizardStep::General, WizardStep::Costing, WizardStep::Review];

    pub fn number(self) -> usize {
        match self {
            WizardStep::General => 1,
            WizardStep::Costing => 2,
            WizardStep::Review => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::General => "General",
            WizardStep::Costing => "Costing",
            WizardStep::Review => "Review",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            WizardStep::General => Some(WizardStep::Costing),
            WizardStep::Costing => Some(WizardStep::Review),
            WizardStep::Review => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            WizardStep::General => None,
            WizardStep::Costing => Some(WizardStep::General),
            WizardStep::Review => Some(WizardStep::Costing),
        }
    }

    /// Step reached by a key press. `enter_is_local` is set when the focused
    /// element consumes Enter itself (multi-line text, buttons).
    pub fn after_key(self, key: &str, enter_is_local: bool) -> Option<Self> {
        match key {
            "Enter" if !enter_is_local => self.next(),
            "Escape" => self.previous(),
            _ => None,
        }
    }
}

/// Editable article. Numeric inputs are kept as typed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArticleForm {
    pub article_no: String,
    pub season: String,
    pub size: String,
    pub category: String,
    pub fabric_type: String,
    pub description: String,
    pub quantity: String,
    pub sales_rate: String,
    pub rates: Vec<RateLine>,
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

impl ArticleForm {
    pub fn from_article(article: &Article) -> Self {
        Self {
            article_no: article.article_no.clone(),
            season: article.season.clone(),
            size: article.size.clone(),
            category: article.category.clone(),
            fabric_type: article.fabric_type.clone(),
            description: article.description.clone().unwrap_or_default(),
            quantity: article.quantity.map(format_amount).unwrap_or_default(),
            sales_rate: format_amount(article.sales_rate),
            rates: article.rates.clone(),
        }
    }

    /// Unparseable text counts as zero for the live summary.
    pub fn sales_rate_value(&self) -> f64 {
        parse_amount(&self.sales_rate).unwrap_or(0.0)
    }

    pub fn summary(&self) -> CostSummary {
        CostSummary::compute(&self.rates, self.sales_rate_value())
    }

    /// Required fields that are still blank, with the step that holds them.
    pub fn missing_fields(&self) -> Vec<(&'static str, WizardStep)> {
        [
            ("Article No.", &self.article_no, WizardStep::General),
            ("Season", &self.season, WizardStep::General),
            ("Size", &self.size, WizardStep::General),
            ("Category", &self.category, WizardStep::General),
            ("Fabric Type", &self.fabric_type, WizardStep::General),
            ("Sales Rate", &self.sales_rate, WizardStep::Costing),
        ]
        .into_iter()
        .filter(|(_, value, _)| value.trim().is_empty())
        .map(|(label, _, step)| (label, step))
        .collect()
    }

    /// Checks presence and numeric fields; on failure names the step to return to.
    pub fn validate(&self) -> Result<(), (String, WizardStep)> {
        if let Some((_, step)) = self.missing_fields().first() {
            return Err((REQUIRED_FIELDS_MESSAGE.to_string(), *step));
        }
        if parse_amount(&self.sales_rate).is_none() {
            return Err(("Sales rate must be a number".to_string(), WizardStep::Costing));
        }
        if !self.quantity.trim().is_empty() && parse_amount(&self.quantity).is_none() {
            return Err(("Quantity must be a number".to_string(), WizardStep::General));
        }
        Ok(())
    }

    pub fn to_dto(&self) -> ArticleDto {
        ArticleDto {
            article_no: self.article_no.trim().to_string(),
            season: self.season.clone(),
            size: self.size.clone(),
            category: self.category.clone(),
            fabric_type: self.fabric_type.trim().to_string(),
            description: self.description.trim().to_string(),
            quantity: parse_amount(&self.quantity),
            sales_rate: self.sales_rate_value(),
            rates: self.rates.clone(),
        }
    }
}

/// Cost types offered in the costing step, defaults when the catalog has none.
pub fn rate_category_choices(catalog: &OptionsCatalog) -> Vec<String> {
    let names = catalog.rate_categories.names();
    if names.is_empty() {
        DEFAULT_RATE_CATEGORIES.iter().map(|c| c.to_string()).collect()
    } else {
        names
    }
}

/// Cost line being composed before it is added to the article.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RateDraft {
    pub category: String,
    pub title: String,
    pub price: String,
}

impl RateDraft {
    pub fn to_line(&self) -> Result<RateLine, String> {
        if self.category.trim().is_empty() {
            return Err("Select a cost type".into());
        }
        let price = parse_amount(&self.price);
        if self.title.trim().is_empty() || price.is_none() {
            return Err("Fill title and price".into());
        }
        Ok(RateLine {
            category: self.category.clone(),
            title: self.title.trim().to_string(),
            price: price.unwrap_or_default(),
        })
    }
}

/// ViewModel for the article wizard
#[derive(Clone, Copy)]
pub struct ArticleDetailsViewModel {
    pub form: RwSignal<ArticleForm>,
    pub draft: RwSignal<RateDraft>,
    pub step: RwSignal<WizardStep>,
    pub editing_id: StoredValue<Option<String>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ArticleDetailsViewModel {
    pub fn new(id: Option<String>) -> Self {
        Self {
            form: RwSignal::new(ArticleForm::default()),
            draft: RwSignal::new(RateDraft::default()),
            step: RwSignal::new(WizardStep::General),
            loading: RwSignal::new(id.is_some()),
            editing_id: StoredValue::new(id),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing_id.with_value(Option::is_some)
    }

    /// Load form data from server if editing
    pub fn load_if_needed(&self, client: ApiClient, notifier: Notifier) {
        let Some(id) = self.editing_id.get_value() else {
            return;
        };
        let this = *self;
        spawn_local(async move {
            match api::fetch_article(client, id).await {
                Ok(article) => this.form.set(ArticleForm::from_article(&article)),
                Err(err) => {
                    if let Some(message) = failure_message(&err, "Failed to load article") {
                        notifier.error(message);
                    }
                }
            }
            this.loading.set(false);
        });
    }

    pub fn go_next(&self) {
        if let Some(next) = self.step.get_untracked().next() {
            self.step.set(next);
        }
    }

    pub fn go_back(&self) {
        if let Some(previous) = self.step.get_untracked().previous() {
            self.step.set(previous);
        }
    }

    pub fn handle_key(&self, key: &str, enter_is_local: bool) {
        if let Some(step) = self.step.get_untracked().after_key(key, enter_is_local) {
            self.step.set(step);
        }
    }

    /// Picking a new cost type clears the title chosen for the old one.
    pub fn set_draft_category(&self, category: String) {
        self.draft.update(|d| {
            d.category = category;
            d.title.clear();
        });
    }

    pub fn add_rate(&self, notifier: Notifier) {
        match self.draft.get_untracked().to_line() {
            Ok(line) => {
                self.form.update(|f| f.rates.push(line));
                self.draft.set(RateDraft::default());
            }
            Err(message) => notifier.warn(message),
        }
    }

    pub fn remove_rate(&self, index: usize) {
        self.form.update(|f| {
            if index < f.rates.len() {
                f.rates.remove(index);
            }
        });
    }

    /// Validate, then create or update. `on_saved` runs only on success.
    pub fn save_command(&self, client: ApiClient, notifier: Notifier, on_saved: Callback<()>) {
        let form = self.form.get_untracked();
        if let Err((message, step)) = form.validate() {
            notifier.error(message);
            self.step.set(step);
            return;
        }

        let dto = form.to_dto();
        match self.editing_id.get_value() {
            Some(id) => Mutation::new(notifier, "Article updated!", "Something went wrong")
                .with_busy(self.saving)
                .run(api::update_article(client, id, dto), move |_| on_saved.run(())),
            None => Mutation::new(notifier, "Article created!", "Something went wrong")
                .with_busy(self.saving)
                .run(api::create_article(client, dto), move |_| on_saved.run(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ArticleForm {
        ArticleForm {
            article_no: "AR-1042".into(),
            season: "Summer".into(),
            size: "M".into(),
            category: "Kurta".into(),
            fabric_type: "Lawn".into(),
            sales_rate: "500".into(),
            rates: vec![
                RateLine {
                    category: "fabric".into(),
                    title: "Lawn 2.5m".into(),
                    price: 100.0,
                },
                RateLine {
                    category: "work".into(),
                    title: "Embroidery".into(),
                    price: 250.5,
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_step_navigation() {
        assert_eq!(WizardStep::General.next(), Some(WizardStep::Costing));
        assert_eq!(WizardStep::Review.next(), None);
        assert_eq!(WizardStep::General.previous(), None);
        assert_eq!(WizardStep::Review.previous(), Some(WizardStep::Costing));
        assert_eq!(WizardStep::Costing.number(), 2);
    }

    #[test]
    fn test_keyboard_steps() {
        assert_eq!(WizardStep::General.after_key("Enter", false), Some(WizardStep::Costing));
        assert_eq!(WizardStep::General.after_key("Enter", true), None);
        assert_eq!(WizardStep::Costing.after_key("Escape", false), Some(WizardStep::General));
        assert_eq!(WizardStep::Review.after_key("Enter", false), None);
        assert_eq!(WizardStep::Costing.after_key("Tab", false), None);
    }

    #[test]
    fn test_live_summary() {
        let summary = complete_form().summary();
        assert_eq!(summary.total_cost, 350.5);
        assert_eq!(summary.profit, 149.5);
        assert_eq!(summary.margin_rounded(), 29.9);
    }

    #[test]
    fn test_zero_sales_rate_is_valid_and_neutral() {
        let form = ArticleForm {
            sales_rate: "0".into(),
            ..complete_form()
        };
        assert!(form.validate().is_ok());
        let summary = form.summary();
        assert_eq!(summary.profit, 0.0);
        assert_eq!(summary.margin_percent, 0.0);
    }

    #[test]
    fn test_missing_required_fields() {
        let form = ArticleForm {
            season: String::new(),
            ..complete_form()
        };
        assert_eq!(
            form.validate(),
            Err((REQUIRED_FIELDS_MESSAGE.to_string(), WizardStep::General))
        );

        let form = ArticleForm {
            sales_rate: " ".into(),
            ..complete_form()
        };
        assert_eq!(form.validate().unwrap_err().1, WizardStep::Costing);
        assert_eq!(form.missing_fields(), vec![("Sales Rate", WizardStep::Costing)]);
    }

    #[test]
    fn test_non_numeric_amounts_rejected() {
        let form = ArticleForm {
            sales_rate: "five hundred".into(),
            ..complete_form()
        };
        assert!(form.validate().is_err());
        let form = ArticleForm {
            quantity: "12x".into(),
            ..complete_form()
        };
        assert_eq!(form.validate().unwrap_err().1, WizardStep::General);
    }

    #[test]
    fn test_to_dto() {
        let form = ArticleForm {
            quantity: "120".into(),
            description: "  Printed lawn  ".into(),
            ..complete_form()
        };
        let dto = form.to_dto();
        assert_eq!(dto.quantity, Some(120.0));
        assert_eq!(dto.sales_rate, 500.0);
        assert_eq!(dto.description, "Printed lawn");
        assert_eq!(dto.rates.len(), 2);
        assert_eq!(complete_form().to_dto().quantity, None);
    }

    #[test]
    fn test_from_article_round_trips_amount_text() {
        let article = Article {
            id: "a1".into(),
            article_no: "AR-7".into(),
            sales_rate: 1250.0,
            quantity: Some(40.5),
            ..Default::default()
        };
        let form = ArticleForm::from_article(&article);
        assert_eq!(form.sales_rate, "1250");
        assert_eq!(form.quantity, "40.5");
    }

    #[test]
    fn test_rate_category_choices() {
        let empty = OptionsCatalog::default();
        assert_eq!(rate_category_choices(&empty), vec!["fabric", "work", "accessory", "labor"]);

        let catalog = OptionsCatalog {
            rate_categories: contracts::system::config::RateCategories(vec![
                ("dyeing".into(), vec!["Vat".into()]),
                ("fabric".into(), vec![]),
            ]),
            ..Default::default()
        };
        assert_eq!(rate_category_choices(&catalog), vec!["dyeing", "fabric"]);
    }

    #[test]
    fn test_rate_draft() {
        let draft = RateDraft {
            category: "labor".into(),
            title: "Stitching".into(),
            price: "85".into(),
        };
        assert_eq!(draft.to_line().unwrap().price, 85.0);

        let missing_price = RateDraft {
            price: String::new(),
            ..draft.clone()
        };
        assert_eq!(missing_price.to_line(), Err("Fill title and price".into()));

        let no_category = RateDraft {
            category: String::new(),
            ..draft
        };
        assert!(no_category.to_line().is_err());
    }
}
