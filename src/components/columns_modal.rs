//! Column visibility configuration for the projects table.
//!
//! The modal contains one checkbox per column, in column order.  Applying
//! the selection drives the inline `display` of the matching header cell
//! and of every body row's cell at the same index.  Correspondence is
//! positional; the template keeps the three lists in matching order.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement, MouseEvent};

use crate::constants::{
    ID_APPLY_COLUMNS_BTN, ID_COLUMNS_MODAL, ID_PROJECTS_TABLE, ID_TOGGLE_COLUMNS_BTN,
    SELECTOR_MODAL_CHECKBOXES,
};
use crate::dom_utils;

/// Wire the open and apply buttons.  Pages without the modal are left alone.
pub fn init(document: &Document) -> Result<(), JsValue> {
    if let Some(btn) = document.get_element_by_id(ID_TOGGLE_COLUMNS_BTN) {
        let scope = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_event: MouseEvent| {
            if let Some(modal) = scope.get_element_by_id(ID_COLUMNS_MODAL) {
                if let Err(err) = dom_utils::open_modal(&modal) {
                    web_sys::console::error_1(&err);
                }
            }
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    if let Some(btn) = document.get_element_by_id(ID_APPLY_COLUMNS_BTN) {
        let scope = document.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_event: MouseEvent| {
            if let Err(err) = apply_selection(&scope) {
                web_sys::console::error_1(&err);
            }
        }));
        btn.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}

/// Apply the checkbox states to the table, then close the modal.
pub fn apply_selection(document: &Document) -> Result<(), JsValue> {
    let modal = match document.get_element_by_id(ID_COLUMNS_MODAL) {
        Some(modal) => modal,
        None => return Ok(()),
    };
    let checkboxes = modal.query_selector_all(SELECTOR_MODAL_CHECKBOXES)?;

    if let Some(table) = document.get_element_by_id(ID_PROJECTS_TABLE) {
        let headers = table.query_selector_all("thead th")?;
        let rows = table.query_selector_all("tbody tr")?;

        for i in 0..checkboxes.length() {
            let visible = checkboxes
                .item(i)
                .and_then(|n| n.dyn_into::<HtmlInputElement>().ok())
                .map(|checkbox| checkbox.checked())
                .unwrap_or(true);

            if let Some(header) = headers.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                set_cell_visible(&header, visible)?;
            }

            for row in dom_utils::elements(&rows) {
                let cells = row.query_selector_all("td")?;
                if let Some(cell) = cells.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    set_cell_visible(&cell, visible)?;
                }
            }
        }
    }

    dom_utils::close_modal(&modal)
}

fn set_cell_visible(cell: &HtmlElement, visible: bool) -> Result<(), JsValue> {
    if visible {
        cell.style().remove_property("display")?;
    } else {
        cell.style().set_property("display", "none")?;
    }
    Ok(())
}
