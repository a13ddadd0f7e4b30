//! Ad-hoc notification banners.
//! Builds a dismissible alert as the first child of the main content
//! container and removes it again after the standard dismiss delay.

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;

use crate::alerts;
use crate::constants::{AUTO_DISMISS_MS, SELECTOR_MAIN_CONTAINER};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Danger,
}

impl NotificationKind {
    /// Framework style suffix, `alert-{suffix}`.
    pub fn css_suffix(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Danger => "danger",
        }
    }

    /// Parse the loose string form used by callers from JS.  Unknown values
    /// fall back to the informational style.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => NotificationKind::Success,
            "warning" => NotificationKind::Warning,
            "danger" => NotificationKind::Danger,
            _ => NotificationKind::Info,
        }
    }
}

pub fn success(message: &str) {
    show(message, NotificationKind::Success);
}

pub fn error(message: &str) {
    show(message, NotificationKind::Danger);
}

pub fn show(message: &str, kind: NotificationKind) {
    if let Err(err) = try_show(message, kind) {
        web_sys::console::warn_1(&err);
    }
}

fn try_show(message: &str, kind: NotificationKind) -> Result<(), JsValue> {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(d) => d,
        None => return Ok(()),
    };
    // No content container on this page – nothing to attach to.
    let container = match document.query_selector(SELECTOR_MAIN_CONTAINER)? {
        Some(c) => c,
        None => return Ok(()),
    };

    let banner = document.create_element("div")?;
    banner.set_class_name(&format!(
        "alert alert-{} alert-dismissible fade show",
        kind.css_suffix()
    ));
    banner.set_text_content(Some(message));

    let close = document.create_element("button")?;
    close.set_attribute("type", "button")?;
    close.set_class_name("btn-close");
    close.set_attribute("data-bs-dismiss", "alert")?;
    banner.append_child(&close)?;

    container.prepend_with_node_1(&banner)?;

    let banner_clone = banner.clone();
    Timeout::new(AUTO_DISMISS_MS, move || {
        alerts::close_alert(&banner_clone);
    })
    .forget();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maps_to_framework_suffix() {
        assert_eq!(NotificationKind::Info.css_suffix(), "info");
        assert_eq!(NotificationKind::Danger.css_suffix(), "danger");
    }

    #[test]
    fn unknown_kind_names_fall_back_to_info() {
        assert_eq!(NotificationKind::from_name("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::from_name("warning"), NotificationKind::Warning);
        assert_eq!(NotificationKind::from_name("fatal"), NotificationKind::Info);
        assert_eq!(NotificationKind::from_name(""), NotificationKind::Info);
    }
}
