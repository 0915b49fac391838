//! Member create/edit form
//!
//! - view_model.rs: form model, validation and the save command
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::UserDetails;
pub use view_model::{UserDetailsViewModel, UserForm};
