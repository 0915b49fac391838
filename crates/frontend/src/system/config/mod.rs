pub mod api;
pub mod context;

pub use context::{use_config, ConfigContext, ConfigState};
