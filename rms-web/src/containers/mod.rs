pub mod header;
pub mod layout;
pub mod records_browser;
