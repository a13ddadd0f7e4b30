//! Browser-side behavior tests.
//! Run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use project_admin_frontend::components::wizard::StepWizard;
use project_admin_frontend::{alerts, components, forms, notify, utils};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn set_body(html: &str) {
    document().body().unwrap().set_inner_html(html);
}

fn input_by_id(id: &str) -> HtmlInputElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
}

fn display_of(id: &str) -> String {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

// ---------------------------------------------------------------------------
// Form pre-validation
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn blank_required_fields_are_flagged_and_cleared() {
    set_body(
        r#"<form id="f">
             <input id="a" required value="">
             <input id="b" required value="ok">
           </form>"#,
    );
    let form = document().get_element_by_id("f").unwrap();

    assert!(!forms::validate_required(&form).unwrap());
    assert!(input_by_id("a").class_list().contains("is-invalid"));
    assert!(!input_by_id("b").class_list().contains("is-invalid"));

    // Whitespace-only still counts as blank
    input_by_id("a").set_value("   ");
    assert!(!forms::validate_required(&form).unwrap());

    input_by_id("a").set_value("filled");
    assert!(forms::validate_required(&form).unwrap());
    assert!(!input_by_id("a").class_list().contains("is-invalid"));
}

#[wasm_bindgen_test]
fn invalid_submit_is_cancelled_and_first_failure_focused() {
    set_body(
        r#"<form id="f">
             <input id="first" required value="">
             <input id="second" required value="">
           </form>"#,
    );
    forms::init(&document()).unwrap();
    let form = document().get_element_by_id("f").unwrap();

    let mut init = web_sys::EventInit::new();
    init.cancelable(true);
    let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();

    assert!(event.default_prevented());
    let active = document().active_element().unwrap();
    assert_eq!(active.id(), "first");

    // With everything filled in the submit goes through untouched
    input_by_id("first").set_value("x");
    input_by_id("second").set_value("y");
    let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
    assert!(!event.default_prevented());
}

// ---------------------------------------------------------------------------
// Row navigation
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn rows_expose_their_detail_link() {
    set_body(
        r#"<table><tbody>
             <tr id="linked"><td><a href="/projects/detail/9">查看</a></td></tr>
             <tr id="inert"><td>no link</td></tr>
           </tbody></table>"#,
    );
    let linked = document().get_element_by_id("linked").unwrap();
    let href = components::table_nav::detail_href(&linked).unwrap().unwrap();
    assert!(href.ends_with("/projects/detail/9"));

    let inert = document().get_element_by_id("inert").unwrap();
    assert!(components::table_nav::detail_href(&inert).unwrap().is_none());
}

// ---------------------------------------------------------------------------
// File preview
// ---------------------------------------------------------------------------

fn select_file(input: &HtmlInputElement, name: &str, contents: &str) {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(contents));
    let file = web_sys::File::new_with_str_sequence(&parts, name).unwrap();
    let transfer = web_sys::DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file).unwrap();
    input.set_files(transfer.files().as_ref());
}

#[wasm_bindgen_test]
fn file_selection_renders_name_and_size() {
    set_body(r#"<div><input id="up" type="file"></div>"#);
    let input = input_by_id("up");
    select_file(&input, "notes.txt", "hello");

    components::file_preview::render_preview(&input).unwrap();

    let info = input.next_element_sibling().unwrap();
    assert_eq!(
        info.text_content().unwrap(),
        "已选择: notes.txt (0.00 MB)"
    );
    assert!(info.class_list().contains("text-muted"));

    // The node is reused on the next selection
    select_file(&input, "slides.pptx", "deck");
    components::file_preview::render_preview(&input).unwrap();
    let again = input.next_element_sibling().unwrap();
    assert_eq!(info, again);
    assert!(again.text_content().unwrap().contains("slides.pptx"));
}

#[wasm_bindgen_test]
fn disallowed_extension_gets_the_warning_style() {
    set_body(r#"<div><input id="up" type="file"></div>"#);
    let input = input_by_id("up");
    select_file(&input, "setup.exe", "MZ");

    components::file_preview::render_preview(&input).unwrap();

    let info = input.next_element_sibling().unwrap();
    assert!(info.text_content().unwrap().contains("不支持的文件类型"));
    assert!(info.class_list().contains("text-danger"));
}

// ---------------------------------------------------------------------------
// Column visibility
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn unchecked_columns_are_hidden_by_index() {
    set_body(
        r#"<div id="columnsModal" class="modal show" style="display: block">
             <input type="checkbox" checked>
             <input type="checkbox">
             <input type="checkbox" checked>
           </div>
           <table id="projectsTable">
             <thead><tr>
               <th id="h0">名称</th><th id="h1">金额</th><th id="h2">状态</th>
             </tr></thead>
             <tbody>
               <tr><td id="r0c0">a</td><td id="r0c1">b</td><td id="r0c2">c</td></tr>
               <tr><td id="r1c0">d</td><td id="r1c1">e</td><td id="r1c2">f</td></tr>
             </tbody>
           </table>"#,
    );

    components::columns_modal::apply_selection(&document()).unwrap();

    assert_eq!(display_of("h1"), "none");
    assert_eq!(display_of("r0c1"), "none");
    assert_eq!(display_of("r1c1"), "none");
    assert_eq!(display_of("h0"), "");
    assert_eq!(display_of("r0c2"), "");

    // Modal is closed after applying
    let modal = document().get_element_by_id("columnsModal").unwrap();
    assert!(!modal.class_list().contains("show"));
    assert_eq!(display_of("columnsModal"), "none");
}

// ---------------------------------------------------------------------------
// Delete confirmation
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn opening_the_delete_dialog_targets_the_project() {
    set_body(
        r##"<a id="confirmDeleteBtn" href="#">确认删除</a>
           <div id="deleteModal" class="modal fade"></div>"##,
    );

    components::delete_modal::open(&document(), "17").unwrap();

    let confirm = document()
        .get_element_by_id("confirmDeleteBtn")
        .unwrap()
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .unwrap();
    assert!(confirm.href().ends_with("/projects/delete/17"));

    let modal = document().get_element_by_id("deleteModal").unwrap();
    assert!(modal.class_list().contains("show"));
    assert_eq!(display_of("deleteModal"), "block");

    // A second invocation overwrites the pending target
    components::delete_modal::open(&document(), "42").unwrap();
    assert!(confirm.href().ends_with("/projects/delete/42"));
}

// ---------------------------------------------------------------------------
// Step wizard
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn wizard_walks_steps_and_updates_progress() {
    set_body(
        r#"<div class="progress"><div class="progress-bar" id="bar"></div></div>
           <div class="step" id="s0"><input id="name" required value=""></div>
           <div class="step d-none" id="s1"></div>
           <div class="step d-none" id="s2"></div>"#,
    );

    let mut wizard = StepWizard::mount(&document()).unwrap().unwrap();
    assert_eq!(wizard.step_count(), 3);
    let bar = document().get_element_by_id("bar").unwrap();
    assert_eq!(bar.text_content().unwrap(), "第1步 (1/3)");

    // Blank required field blocks the transition
    wizard.next().unwrap();
    assert_eq!(wizard.cursor(), 0);
    assert!(input_by_id("name").class_list().contains("is-invalid"));

    input_by_id("name").set_value("项目A");
    wizard.next().unwrap();
    assert_eq!(wizard.cursor(), 1);
    assert_eq!(bar.text_content().unwrap(), "第2步 (2/3)");
    let s0 = document().get_element_by_id("s0").unwrap();
    let s1 = document().get_element_by_id("s1").unwrap();
    assert!(s0.class_list().contains("d-none"));
    assert!(!s1.class_list().contains("d-none"));

    // Going back never validates
    wizard.previous().unwrap();
    assert_eq!(wizard.cursor(), 0);
    // ...and is clamped at the first step
    wizard.previous().unwrap();
    assert_eq!(wizard.cursor(), 0);

    wizard.next().unwrap();
    wizard.next().unwrap();
    assert_eq!(wizard.cursor(), 2);
    assert_eq!(bar.text_content().unwrap(), "第3步 (3/3)");
    // Clamped at the last step
    wizard.next().unwrap();
    assert_eq!(wizard.cursor(), 2);
}

#[wasm_bindgen_test]
fn pages_without_wizard_markup_get_no_controller() {
    set_body("<p>plain page</p>");
    assert!(StepWizard::mount(&document()).unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Notifications & alert dismissal
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn notification_banner_is_prepended_to_the_container() {
    set_body(r#"<div class="container-fluid"><p>内容</p></div>"#);

    notify::show("保存成功", notify::NotificationKind::Success);

    let container = document().query_selector(".container-fluid").unwrap().unwrap();
    let banner = container.first_element_child().unwrap();
    assert_eq!(
        banner.class_name(),
        "alert alert-success alert-dismissible fade show"
    );
    assert!(banner.text_content().unwrap().starts_with("保存成功"));
    assert!(banner.query_selector(".btn-close").unwrap().is_some());
}

#[wasm_bindgen_test]
async fn closing_an_alert_fades_then_removes_it() {
    set_body(r#"<div id="flash" class="alert alert-info fade show">已保存</div>"#);
    let alert = document().get_element_by_id("flash").unwrap();

    alerts::close_alert(&alert);
    // Fade starts immediately...
    assert!(!alert.class_list().contains("show"));
    assert!(document().get_element_by_id("flash").is_some());

    // ...and the node is gone once the transition window has passed.
    gloo_timers::future::TimeoutFuture::new(400).await;
    assert!(document().get_element_by_id("flash").is_none());
}

// ---------------------------------------------------------------------------
// Locale formatting
// ---------------------------------------------------------------------------

#[wasm_bindgen_test]
fn currency_uses_cny_grouping_and_two_decimals() {
    assert_eq!(utils::format_currency(1234.5), "¥1,234.50");
    assert_eq!(utils::format_currency(0.0), "¥0.00");
}

#[wasm_bindgen_test]
fn dates_render_in_the_page_locale() {
    assert_eq!(utils::format_date("2025-04-21T12:00:00"), "2025/4/21");
    // Unparseable input falls through unchanged
    assert_eq!(utils::format_date("not-a-date"), "not-a-date");
}
