//! Inline preview for file inputs.
//!
//! On every selection the chosen file's name and size are rendered into a
//! small info node directly after the input.  The node is created once and
//! reused.  When the selection would be rejected by the server (too large,
//! disallowed extension) the preview switches to a warning style – the
//! upload itself is still the server's call.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use crate::constants::{
    CLASS_FILE_INFO, CLASS_FILE_INFO_MARKER, CLASS_FILE_INFO_WARN, MAX_UPLOAD_BYTES,
    SELECTOR_FILE_INPUTS,
};
use crate::utils;

/// Wire a change handler onto every file input present on the page.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let inputs = document.query_selector_all(SELECTOR_FILE_INPUTS)?;
    for i in 0..inputs.length() {
        let input = match inputs.item(i).and_then(|n| n.dyn_into::<HtmlInputElement>().ok()) {
            Some(input) => input,
            None => continue,
        };
        let scope = input.clone();
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_event: web_sys::Event| {
            if let Err(err) = render_preview(&scope) {
                web_sys::console::error_1(&err);
            }
        }));
        input.add_event_listener_with_callback("change", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }
    Ok(())
}

/// Refresh the preview node for the input's current selection.
pub fn render_preview(input: &HtmlInputElement) -> Result<(), JsValue> {
    let file = input.files().and_then(|list| list.get(0));

    match file {
        Some(file) => {
            let info = ensure_info_node(input)?;
            let size_mb = utils::format_file_size_mb(file.size());
            let mut text = format!("已选择: {} ({} MB)", file.name(), size_mb);

            let mut warn = false;
            if file.size() > MAX_UPLOAD_BYTES {
                text.push_str("（超过 16 MB 上传限制）");
                warn = true;
            } else if !utils::has_allowed_extension(&file.name()) {
                text.push_str("（不支持的文件类型）");
                warn = true;
            }

            info.set_class_name(if warn { CLASS_FILE_INFO_WARN } else { CLASS_FILE_INFO });
            info.set_text_content(Some(&text));
        }
        None => {
            // Selection cleared – drop the stale preview, keep the node.
            if let Some(info) = existing_info_node(input) {
                info.set_text_content(None);
            }
        }
    }
    Ok(())
}

fn existing_info_node(input: &HtmlInputElement) -> Option<Element> {
    input
        .next_element_sibling()
        .filter(|el| el.class_list().contains(CLASS_FILE_INFO_MARKER))
}

fn ensure_info_node(input: &HtmlInputElement) -> Result<Element, JsValue> {
    if let Some(existing) = existing_info_node(input) {
        return Ok(existing);
    }
    let document = input
        .owner_document()
        .ok_or_else(|| JsValue::from_str("file input is detached"))?;
    let info = document.create_element("div")?;
    info.set_class_name(CLASS_FILE_INFO);
    if let Some(parent) = input.parent_node() {
        parent.insert_before(&info, input.next_sibling().as_ref())?;
    }
    Ok(info)
}
