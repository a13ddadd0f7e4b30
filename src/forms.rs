//! Client-side pre-validation of required form fields.
//!
//! Best-effort UX convenience only – the server re-validates everything.
//! Each form is handled independently; the wizard reuses the same
//! required-field check per step.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::constants::{CLASS_INVALID, SELECTOR_FORMS, SELECTOR_REQUIRED};
use crate::dom_utils;

/// Attach a submit-time validator to every form on the page.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let forms = document.query_selector_all(SELECTOR_FORMS)?;
    for form in dom_utils::elements(&forms) {
        let scope = form.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: web_sys::Event| {
            match validate_required(&scope) {
                Ok(true) => {}
                Ok(false) => {
                    event.prevent_default();
                    focus_first_invalid(&scope);
                }
                Err(err) => web_sys::console::error_1(&err),
            }
        }));
        form.add_event_listener_with_callback("submit", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Check every `[required]` field inside `scope`.  Failing fields get the
/// invalid flag, passing ones have any stale flag cleared.  Returns whether
/// the whole scope is valid.
pub fn validate_required(scope: &Element) -> Result<bool, JsValue> {
    let fields = scope.query_selector_all(SELECTOR_REQUIRED)?;
    let mut all_valid = true;
    for field in dom_utils::elements(&fields) {
        match field_value(&field) {
            Some(value) if value.trim().is_empty() => {
                dom_utils::mark_invalid(&field);
                all_valid = false;
            }
            Some(_) => dom_utils::clear_invalid(&field),
            // `[required]` on something without a text value – not ours to judge
            None => {}
        }
    }
    Ok(all_valid)
}

/// Scroll the first flagged field to the middle of the viewport and give it
/// input focus so the user lands on the problem.
pub fn focus_first_invalid(scope: &Element) {
    let first = match scope.query_selector(&format!(".{}", CLASS_INVALID)) {
        Ok(Some(el)) => el,
        _ => return,
    };
    let mut options = ScrollIntoViewOptions::new();
    options
        .behavior(ScrollBehavior::Smooth)
        .block(ScrollLogicalPosition::Center);
    first.scroll_into_view_with_scroll_into_view_options(&options);
    if let Some(html) = first.dyn_ref::<HtmlElement>() {
        let _ = html.focus();
    }
}

/// Current text value of a form field, or `None` for elements that do not
/// carry one (fieldsets, custom widgets, ...).
fn field_value(el: &Element) -> Option<String> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    if let Some(textarea) = el.dyn_ref::<HtmlTextAreaElement>() {
        return Some(textarea.value());
    }
    None
}
