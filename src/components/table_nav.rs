//! Click-to-navigate table rows.
//!
//! A row that embeds a project detail link becomes clickable as a whole;
//! clicks that land on nested buttons or links keep their own semantics.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement, MouseEvent};

use crate::constants::{SELECTOR_DETAIL_LINK, SELECTOR_TABLE_ROWS};
use crate::dom_utils;

/// Wire a click handler onto every table body row present on the page.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let rows = document.query_selector_all(SELECTOR_TABLE_ROWS)?;
    for row in dom_utils::elements(&rows) {
        let scope = row.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |event: MouseEvent| {
            if let Err(err) = handle_row_click(&scope, &event) {
                web_sys::console::error_1(&err);
            }
        }));
        row.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

fn handle_row_click(row: &Element, event: &MouseEvent) -> Result<(), JsValue> {
    if let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) {
        // Nested interactive elements keep their own click semantics.
        if target.closest("button")?.is_some() || target.closest("a")?.is_some() {
            return Ok(());
        }
    }

    if let Some(href) = detail_href(row)? {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        window.location().set_href(&href)?;
    }
    Ok(())
}

/// Absolute URL of the row's embedded detail link, if any.
pub fn detail_href(row: &Element) -> Result<Option<String>, JsValue> {
    let link = row.query_selector(SELECTOR_DETAIL_LINK)?;
    Ok(link
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .map(|anchor| anchor.href()))
}
