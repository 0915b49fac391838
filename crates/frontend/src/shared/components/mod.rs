pub mod badge;
pub mod confirmation_modal;
pub mod data_table;
pub mod empty_state;
pub mod filter_drawer;
pub mod page_header;
pub mod pagination_controls;
pub mod sortable_header_cell;
pub mod stat_card;
pub mod ui;

pub use badge::{Badge, BadgeSize, BadgeVariant};
pub use confirmation_modal::ConfirmationModal;
pub use data_table::{Column, DataTable, FilterButton, LoadingRows};
pub use empty_state::EmptyState;
pub use filter_drawer::FilterDrawer;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
pub use sortable_header_cell::SortableHeaderCell;
pub use stat_card::StatCard;
pub use ui::{SelectField, TextAreaField, TextField};
