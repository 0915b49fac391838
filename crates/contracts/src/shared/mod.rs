pub mod envelope;
pub mod list_query;
