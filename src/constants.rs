//! Markup contract shared with the server-rendered templates.
//!
//! Every id, class, selector and limit the behaviors depend on lives here so
//! a template change only has to be reconciled in one place.  The column
//! modal additionally relies on *positional* correspondence between its
//! checkboxes and the table columns; that ordering is part of the template
//! contract and is not enforced at runtime.

// Timing
pub const AUTO_DISMISS_MS: u32 = 5000;
/// Grace period for the framework fade transition before the node is removed.
pub const ALERT_FADE_MS: u32 = 200;

// Flash alerts / notifications
pub const SELECTOR_ALERT: &str = ".alert";
pub const SELECTOR_MAIN_CONTAINER: &str = ".container-fluid";

// Tables
pub const SELECTOR_TABLE_ROWS: &str = "tbody tr";
pub const SELECTOR_DETAIL_LINK: &str = "a[href*=\"/projects/detail/\"]";
pub const ID_PROJECTS_TABLE: &str = "projectsTable";

// Forms
pub const SELECTOR_FORMS: &str = "form";
pub const SELECTOR_REQUIRED: &str = "[required]";
pub const CLASS_INVALID: &str = "is-invalid";

// File upload preview.  Size and extension limits mirror what the server
// enforces on upload; the preview only warns, the server still decides.
pub const SELECTOR_FILE_INPUTS: &str = "input[type=\"file\"]";
pub const CLASS_FILE_INFO_MARKER: &str = "file-info";
pub const CLASS_FILE_INFO: &str = "file-info mt-2 text-muted small";
pub const CLASS_FILE_INFO_WARN: &str = "file-info mt-2 text-danger small";
pub const MAX_UPLOAD_BYTES: f64 = 16.0 * 1024.0 * 1024.0;
pub const ALLOWED_UPLOAD_EXTENSIONS: &[&str] = &[
    "txt", "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "jpg", "jpeg", "png", "gif",
];

// Column visibility modal
pub const ID_TOGGLE_COLUMNS_BTN: &str = "toggleColumnsBtn";
pub const ID_APPLY_COLUMNS_BTN: &str = "applyColumnsBtn";
pub const ID_COLUMNS_MODAL: &str = "columnsModal";
pub const SELECTOR_MODAL_CHECKBOXES: &str = "input[type=\"checkbox\"]";

// Delete confirmation
pub const ID_DELETE_MODAL: &str = "deleteModal";
pub const ID_CONFIRM_DELETE_BTN: &str = "confirmDeleteBtn";
pub const ATTR_DELETE_PROJECT: &str = "data-delete-project";
pub const SELECTOR_DELETE_TRIGGER: &str = "[data-delete-project]";
pub const DELETE_URL_PREFIX: &str = "/projects/delete/";

// Step wizard
pub const SELECTOR_STEPS: &str = ".step";
pub const SELECTOR_NEXT_BUTTONS: &str = ".next-step";
pub const SELECTOR_PREV_BUTTONS: &str = ".prev-step";
pub const SELECTOR_PROGRESS_BAR: &str = ".progress-bar";
pub const CLASS_HIDDEN: &str = "d-none";

// Locale used for user-facing date and currency rendering
pub const LOCALE: &str = "zh-CN";
pub const CURRENCY: &str = "CNY";
