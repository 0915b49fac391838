pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod icons;
pub mod list_fetcher;
pub mod list_utils;
pub mod modal;
pub mod mutation;
pub mod notify;
pub mod number_format;
pub mod table_state;
