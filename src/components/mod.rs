pub mod columns_modal;
pub mod delete_modal;
pub mod file_preview;
pub mod table_nav;
pub mod wizard;
