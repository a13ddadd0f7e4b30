//! Delete confirmation dialog.
//!
//! A single delegated click listener watches for elements carrying the
//! `data-delete-project` attribute, rewrites the confirm button's target to
//! the matching deletion URL and opens the modal.  The deletion itself
//! happens server-side when the user follows the confirm link.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, MouseEvent};

use crate::constants::{
    ATTR_DELETE_PROJECT, DELETE_URL_PREFIX, ID_CONFIRM_DELETE_BTN, ID_DELETE_MODAL,
    SELECTOR_DELETE_TRIGGER,
};
use crate::dom_utils;

/// Register the document-level delegation handler.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let scope = document.clone();
    let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: MouseEvent| {
        let target = match event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
            Some(target) => target,
            None => return,
        };
        let trigger = match target.closest(SELECTOR_DELETE_TRIGGER) {
            Ok(Some(trigger)) => trigger,
            _ => return,
        };
        if let Some(project_id) = trigger.get_attribute(ATTR_DELETE_PROJECT) {
            if let Err(err) = open(&scope, &project_id) {
                web_sys::console::error_1(&err);
            }
        }
    }));
    document.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Point the confirm button at the project's deletion URL and show the
/// modal.  A later invocation simply overwrites the pending target.
pub fn open(document: &Document, project_id: &str) -> Result<(), JsValue> {
    if let Some(confirm) = document.get_element_by_id(ID_CONFIRM_DELETE_BTN) {
        if let Some(anchor) = confirm.dyn_ref::<HtmlAnchorElement>() {
            anchor.set_href(&delete_url(project_id));
        }
    }
    if let Some(modal) = document.get_element_by_id(ID_DELETE_MODAL) {
        dom_utils::open_modal(&modal)?;
    }
    Ok(())
}

/// Deletion URL for a project id.
pub fn delete_url(project_id: &str) -> String {
    format!("{}{}", DELETE_URL_PREFIX, project_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_url_embeds_the_project_id() {
        assert_eq!(delete_url("42"), "/projects/delete/42");
        assert_eq!(delete_url(""), "/projects/delete/");
    }
}
