//! Option catalog maintenance: seasons, sizes, categories and the titles
//! of each rate category.

pub mod page;

pub use page::OptionsPage;
