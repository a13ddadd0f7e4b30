//! Page behaviors for the project-management admin pages.
//!
//! The server renders the markup; this module attaches the client-side
//! presentation glue once the document is ready: flash-alert auto-dismiss,
//! clickable table rows, form pre-validation, upload previews, the column
//! visibility and delete-confirmation modals and the multi-step wizard.
//! Every behavior tolerates its markup being absent – pages only get the
//! behaviors their elements ask for.

use wasm_bindgen::prelude::*;

pub mod alerts;
pub mod components;
pub mod constants;
pub mod dom_utils;
pub mod forms;
pub mod notify;
pub mod utils;

// Main entry point for the WASM module
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().expect("no global `window` exists");
    let document = window.document().expect("should have a document on window");

    alerts::arm_auto_dismiss(&document);
    components::table_nav::init(&document)?;
    forms::init(&document)?;
    components::file_preview::init(&document)?;
    components::columns_modal::init(&document)?;
    components::delete_modal::init(&document)?;
    components::wizard::init(&document)?;

    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers exported to other page scripts
// ---------------------------------------------------------------------------

/// Render a date in the locale's standard date format.
#[wasm_bindgen(js_name = formatDate)]
pub fn format_date(value: &str) -> String {
    utils::format_date(value)
}

/// Format a numeric amount as a localized CNY currency string.
#[wasm_bindgen(js_name = formatCurrency)]
pub fn format_currency(amount: f64) -> String {
    utils::format_currency(amount)
}

/// Show a dismissible notification banner.  `kind` is one of `info`,
/// `success`, `warning`, `danger`; anything else means `info`.
#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = notify::NotificationKind::from_name(kind.as_deref().unwrap_or("info"));
    notify::show(message, kind);
}
