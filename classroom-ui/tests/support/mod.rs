// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for classroom-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection and DOM
// interaction helpers so that individual test files stay focused on
// assertions rather than boilerplate.
#![allow(dead_code)]

use dioxus::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

pub fn text_of(mount: &web_sys::Element) -> String {
    mount.text_content().unwrap_or_default()
}

/// First element matching `selector`, panicking with the selector if absent.
pub fn find(mount: &web_sys::Element, selector: &str) -> web_sys::Element {
    mount
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {selector}"))
}

pub fn count(mount: &web_sys::Element, selector: &str) -> u32 {
    mount.query_selector_all(selector).unwrap().length()
}

/// First `<button>` whose text contains `label`.
pub fn button_with_text(mount: &web_sys::Element, label: &str) -> web_sys::HtmlButtonElement {
    let buttons = mount.query_selector_all("button").unwrap();
    (0..buttons.length())
        .filter_map(|i| buttons.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlButtonElement>().ok())
        .find(|b| b.text_content().unwrap_or_default().contains(label))
        .unwrap_or_else(|| panic!("no button labelled {label}"))
}

/// Click the first button labelled `label` and let Dioxus re-render.
pub async fn click_button(mount: &web_sys::Element, label: &str) {
    button_with_text(mount, label).click();
    yield_now().await;
}

fn dispatch_bubbling(target: &web_sys::Element, kind: &str) {
    let init = web_sys::EventInit::new();
    init.set_bubbles(true);
    let event = web_sys::Event::new_with_event_init_dict(kind, &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

/// Type `value` into the input matching `selector`.
pub async fn set_input_value(mount: &web_sys::Element, selector: &str, value: &str) {
    let input = find(mount, selector)
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(value);
    dispatch_bubbling(&input, "input");
    yield_now().await;
}

/// Pick `value` in the `index`-th `<select>` matching `selector`.
pub async fn choose_option(mount: &web_sys::Element, selector: &str, index: u32, value: &str) {
    let select = mount
        .query_selector_all(selector)
        .unwrap()
        .item(index)
        .unwrap_or_else(|| panic!("no select #{index} for {selector}"))
        .dyn_into::<web_sys::HtmlSelectElement>()
        .unwrap();
    select.set_value(value);
    dispatch_bubbling(&select, "change");
    yield_now().await;
}

// ---------------------------------------------------------------------------
// Dioxus rendering helper
// ---------------------------------------------------------------------------

/// Render a Dioxus component into the given mount element.
///
/// Use this in `#[wasm_bindgen_test] async fn` tests:
///
/// ```ignore
/// let mount = create_mount_point();
/// render_into(&mount, || rsx! { MyComponent { prop: "value" } });
/// yield_now().await;
/// // assert on mount.query_selector(...)
/// cleanup(&mount);
/// ```
pub fn render_into(mount: &web_sys::Element, root: fn() -> Element) {
    let cfg = dioxus::web::Config::new().rootelement(mount.clone());
    dioxus::web::launch::launch_virtual_dom(VirtualDom::new(root), cfg);
}

/// Yield to the browser event loop so Dioxus can process pending renders.
pub async fn yield_now() {
    for _ in 0..2 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            gloo_utils::window()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }
}

/// Render and wait long enough for provider futures and the re-render they
/// trigger to complete.
pub async fn mount_dioxus(root: fn() -> Element, mount: &web_sys::Element) {
    render_into(mount, root);
    settle().await;
}

pub async fn settle() {
    yield_now().await;
    yield_now().await;
}

// ---------------------------------------------------------------------------
// Runtime config injection (integration tests)
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` using the loopback provider.
pub fn inject_app_config() {
    inject_app_config_with(&[]);
}

/// Like [`inject_app_config`] with extra string-valued keys.
pub fn inject_app_config_with(extra: &[(&str, &str)]) {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &wasm_bindgen::JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("videoProvider", &"loopback".into());
    for (key, value) in extra {
        set(key, &(*value).into());
    }

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

/// Push the browser URL so the Router renders `path`.
pub fn navigate_to(path: &str) {
    let _ = gloo_utils::window()
        .history()
        .unwrap()
        .push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
}

pub fn clear_local_storage() {
    if let Some(storage) = gloo_utils::window().local_storage().ok().flatten() {
        storage.clear().ok();
    }
}
