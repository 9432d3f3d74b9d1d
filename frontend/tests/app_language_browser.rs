#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use hero_frontend::i18n::Language;
use hero_frontend::{detect_browser_language, App, LANGUAGE_KEY};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, Storage};
use yew::AppHandle;

wasm_bindgen_test_configure!(run_in_browser);

fn storage() -> Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

fn html_element() -> Element {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .document_element()
        .unwrap()
}

fn mount() -> (Element, AppHandle<App>) {
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    let app = yew::Renderer::<App>::with_root(root.clone()).render();
    (root, app)
}

async fn settle() {
    TimeoutFuture::new(100).await;
}

// Both cases share local storage and <html>, so they run in one test.
#[wasm_bindgen_test]
async fn language_follows_browser_then_persists_switches() {
    storage().remove_item(LANGUAGE_KEY).unwrap();
    let (first_root, first_app) = mount();
    settle().await;

    let detected = detect_browser_language();
    assert_eq!(html_element().get_attribute("lang").as_deref(), Some(detected.code()));
    assert_eq!(
        html_element().get_attribute("dir").as_deref(),
        Some(detected.direction().as_str())
    );
    first_app.destroy();
    first_root.remove();

    storage()
        .set_item(LANGUAGE_KEY, &serde_json::to_string(&Language::En).unwrap())
        .unwrap();
    let (root, app) = mount();
    settle().await;
    assert_eq!(html_element().get_attribute("dir").as_deref(), Some("ltr"));

    let switch: HtmlElement = root
        .query_selector(".nav-language")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();
    switch.click();
    settle().await;

    assert_eq!(
        storage().get_item(LANGUAGE_KEY).unwrap().as_deref(),
        Some("\"he\"")
    );
    assert_eq!(html_element().get_attribute("lang").as_deref(), Some("he"));
    assert_eq!(html_element().get_attribute("dir").as_deref(), Some("rtl"));

    app.destroy();
    root.remove();
    storage().remove_item(LANGUAGE_KEY).unwrap();
}
