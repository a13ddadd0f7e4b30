//! Formatting helpers shared across the page behaviors.
//!
//! Date and currency rendering go through the browser's own locale
//! machinery (`Date`, `Intl.NumberFormat`) so the output matches what the
//! rest of the admin UI shows; the remaining helpers are plain string work.

use js_sys::{Array, Date, Intl, Object, Reflect};
use wasm_bindgen::JsValue;

use crate::constants::{ALLOWED_UPLOAD_EXTENSIONS, CURRENCY, LOCALE};

/// Render a date representation (ISO string or anything `Date` accepts) in
/// the locale's standard date format.  Unparseable input is returned
/// unchanged so callers can still show *something* in a table cell.
pub fn format_date(value: &str) -> String {
    let date = Date::new(&JsValue::from_str(value));
    if date.get_time().is_nan() {
        return value.to_string();
    }
    String::from(date.to_locale_date_string(LOCALE, &JsValue::UNDEFINED))
}

/// Format a numeric amount as a localized CNY currency string, e.g.
/// `¥1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let locales = Array::of1(&JsValue::from_str(LOCALE));
    let options = Object::new();
    let _ = Reflect::set(&options, &JsValue::from_str("style"), &JsValue::from_str("currency"));
    let _ = Reflect::set(&options, &JsValue::from_str("currency"), &JsValue::from_str(CURRENCY));

    let formatter = Intl::NumberFormat::new(&locales, &options);
    formatter
        .format()
        .call1(&JsValue::NULL, &JsValue::from_f64(amount))
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_else(|| format!("¥{:.2}", amount))
}

/// Byte count rendered as a two-decimal MB figure (1 MB = 1024 · 1024 bytes).
pub fn format_file_size_mb(bytes: f64) -> String {
    format!("{:.2}", bytes / 1024.0 / 1024.0)
}

/// Whether the file name carries an extension the server accepts for upload.
pub fn has_allowed_extension(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_UPLOAD_EXTENSIONS
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ext)),
        None => false,
    }
}
