//! Multi-step form wizard.
//!
//! One controller per page owns the ordered step list, the cursor and the
//! optional progress bar.  Exactly one step is visible at a time and the
//! visible index always equals the cursor.  Moving forward validates the
//! current step's required fields first; moving back never validates.
//! Both directions are bounds-clamped no-ops at the ends.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use crate::constants::{
    SELECTOR_NEXT_BUTTONS, SELECTOR_PREV_BUTTONS, SELECTOR_PROGRESS_BAR, SELECTOR_STEPS,
};
use crate::dom_utils;
use crate::forms;

pub struct StepWizard {
    steps: Vec<Element>,
    progress_bar: Option<HtmlElement>,
    cursor: usize,
}

impl StepWizard {
    /// Collect the page's step elements and progress bar.  Returns `None`
    /// when the page has no wizard markup.
    pub fn mount(document: &Document) -> Result<Option<Self>, JsValue> {
        let step_nodes = document.query_selector_all(SELECTOR_STEPS)?;
        let steps: Vec<Element> = dom_utils::elements(&step_nodes).collect();
        if steps.is_empty() {
            return Ok(None);
        }

        let progress_bar = document
            .query_selector(SELECTOR_PROGRESS_BAR)?
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let wizard = StepWizard {
            steps,
            progress_bar,
            cursor: 0,
        };
        wizard.update_progress()?;
        Ok(Some(wizard))
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Advance to the next step if the current one validates.  No-op on the
    /// last step.
    pub fn next(&mut self) -> Result<(), JsValue> {
        if self.cursor + 1 >= self.steps.len() {
            return Ok(());
        }
        if !forms::validate_required(&self.steps[self.cursor])? {
            return Ok(());
        }
        dom_utils::hide(&self.steps[self.cursor]);
        self.cursor += 1;
        dom_utils::show(&self.steps[self.cursor]);
        self.update_progress()
    }

    /// Go back one step, unconditionally.  No-op on the first step.
    pub fn previous(&mut self) -> Result<(), JsValue> {
        if self.cursor == 0 {
            return Ok(());
        }
        dom_utils::hide(&self.steps[self.cursor]);
        self.cursor -= 1;
        dom_utils::show(&self.steps[self.cursor]);
        self.update_progress()
    }

    fn update_progress(&self) -> Result<(), JsValue> {
        if let Some(bar) = &self.progress_bar {
            let percent = progress_percent(self.cursor, self.steps.len());
            bar.style().set_property("width", &format!("{}%", percent))?;
            bar.set_text_content(Some(&progress_label(self.cursor, self.steps.len())));
        }
        Ok(())
    }
}

/// Progress bar width for a cursor position, in percent.
pub fn progress_percent(cursor: usize, step_count: usize) -> f64 {
    if step_count == 0 {
        return 0.0;
    }
    ((cursor + 1) as f64 / step_count as f64) * 100.0
}

/// Progress bar label, e.g. `第2步 (2/3)`.
pub fn progress_label(cursor: usize, step_count: usize) -> String {
    format!("第{}步 ({}/{})", cursor + 1, cursor + 1, step_count)
}

/// Mount the wizard (when the page has one) and wire its navigation
/// buttons into the shared controller.
pub fn init(document: &Document) -> Result<(), JsValue> {
    let wizard = match StepWizard::mount(document)? {
        Some(wizard) => Rc::new(RefCell::new(wizard)),
        None => return Ok(()),
    };

    let next_buttons = document.query_selector_all(SELECTOR_NEXT_BUTTONS)?;
    for button in dom_utils::elements(&next_buttons) {
        let wizard = Rc::clone(&wizard);
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_event: MouseEvent| {
            if let Err(err) = wizard.borrow_mut().next() {
                web_sys::console::error_1(&err);
            }
        }));
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    let prev_buttons = document.query_selector_all(SELECTOR_PREV_BUTTONS)?;
    for button in dom_utils::elements(&prev_buttons) {
        let wizard = Rc::clone(&wizard);
        let cb = Closure::<dyn FnMut(_)>::wrap(Box::new(move |_event: MouseEvent| {
            if let Err(err) = wizard.borrow_mut().previous() {
                web_sys::console::error_1(&err);
            }
        }));
        button.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())?;
        cb.forget();
    }

    Ok(())
}
