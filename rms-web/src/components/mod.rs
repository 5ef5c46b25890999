pub(crate) mod error_alert;
pub(crate) mod form_field;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod records_table;
pub(crate) mod ref_select;

// Re-export components for convenience
pub use error_alert::ErrorAlert;
pub use form_field::FormField;
pub use header_nav_item::HeaderNavItem;
pub use loading::Loading;
pub use records_table::{RecordsTable, RowAction};
pub use ref_select::RefSelect;
