//! Auto-dismiss for the flash alerts the server renders into the page.
//!
//! One deferred sweep, armed at startup: whatever `.alert` elements exist at
//! that moment are closed through their normal fade transition.  Alerts
//! inserted later (e.g. via [`crate::notify`]) schedule their own removal.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::{ALERT_FADE_MS, AUTO_DISMISS_MS, SELECTOR_ALERT};
use crate::dom_utils;

/// Arm the one-shot dismiss timer.  Fire-and-forget; the timeout is never
/// cancelled.
pub fn arm_auto_dismiss(document: &Document) {
    let document = document.clone();
    Timeout::new(AUTO_DISMISS_MS, move || {
        if let Err(err) = dismiss_present_alerts(&document) {
            web_sys::console::warn_1(&err);
        }
    })
    .forget();
}

fn dismiss_present_alerts(document: &Document) -> Result<(), JsValue> {
    let alerts = document.query_selector_all(SELECTOR_ALERT)?;
    for alert in dom_utils::elements(&alerts) {
        close_alert(&alert);
    }
    Ok(())
}

/// Close a dismissible alert: drop the `show` class so the framework fade
/// runs, then detach the node once the transition window has passed.
pub fn close_alert(alert: &Element) {
    let _ = alert.class_list().remove_1("show");
    let alert = alert.clone();
    Timeout::new(ALERT_FADE_MS, move || {
        alert.remove();
    })
    .forget();
}
