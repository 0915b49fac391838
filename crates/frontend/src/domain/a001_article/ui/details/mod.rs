//! Article create/edit wizard
//!
//! - view_model.rs: form model, step machine, costing and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::ArticleDetails;
pub use view_model::{rate_category_choices, ArticleDetailsViewModel, ArticleForm, RateDraft, WizardStep};
