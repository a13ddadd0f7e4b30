//! dom_utils.rs – thin helper layer for repetitive DOM operations.
//!
//! Small, **ergonomic** wrappers for the show / hide / flag patterns the
//! behaviors share, so `class_list()` and `style()` plumbing is not
//! sprinkled across the code-base.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, NodeList};

use crate::constants::{CLASS_HIDDEN, CLASS_INVALID};

/// Reveal a wizard step (or any element hidden via the utility class).
pub fn show(el: &Element) {
    let _ = el.class_list().remove_1(CLASS_HIDDEN);
}

/// Hide an element by toggling the utility class.
pub fn hide(el: &Element) {
    let _ = el.class_list().add_1(CLASS_HIDDEN);
}

/// Flag a form field as failing validation.
pub fn mark_invalid(el: &Element) {
    let _ = el.class_list().add_1(CLASS_INVALID);
}

/// Clear a stale validation flag.
pub fn clear_invalid(el: &Element) {
    let _ = el.class_list().remove_1(CLASS_INVALID);
}

/// Open a framework modal without the framework's own JS: the `show` class
/// drives the fade styling, the inline display makes it visible.
pub fn open_modal(modal: &Element) -> Result<(), JsValue> {
    modal.class_list().add_1("show")?;
    if let Some(html) = modal.dyn_ref::<HtmlElement>() {
        html.style().set_property("display", "block")?;
    }
    Ok(())
}

/// Counterpart to [`open_modal`].
pub fn close_modal(modal: &Element) -> Result<(), JsValue> {
    modal.class_list().remove_1("show")?;
    if let Some(html) = modal.dyn_ref::<HtmlElement>() {
        html.style().set_property("display", "none")?;
    }
    Ok(())
}

/// Iterate a static `NodeList` as `Element`s, skipping non-element nodes.
pub fn elements(list: &NodeList) -> impl Iterator<Item = Element> + '_ {
    (0..list.length()).filter_map(|i| list.item(i).and_then(|n| n.dyn_into::<Element>().ok()))
}
