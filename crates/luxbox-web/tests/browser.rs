#![forbid(unsafe_code)]
#![cfg(target_arch = "wasm32")]

//! Browser-side checks for the exported widget: trigger registry
//! idempotence, the non-image no-op path, and visibility reporting.
//!
//! Run with `wasm-pack test --headless --chrome crates/luxbox-web`.

use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;

use luxbox_web::Luxbox;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window()
        .expect("window")
        .document()
        .expect("document")
}

fn anchor(href: &str) -> HtmlElement {
    use wasm_bindgen::JsCast;
    let el = document().create_element("a").expect("create anchor");
    el.set_attribute("href", href).expect("set href");
    let el: HtmlElement = el.dyn_into().expect("anchor is an html element");
    document().body().expect("body").append_child(&el).expect("append");
    el
}

#[wasm_bindgen_test]
fn starts_closed() {
    let lightbox = Luxbox::new(JsValue::UNDEFINED).expect("construct");
    assert!(!lightbox.is_open());
}

#[wasm_bindgen_test]
fn add_and_remove_are_idempotent() {
    let lightbox = Luxbox::new(JsValue::UNDEFINED).expect("construct");
    let el = anchor("photo.jpg");

    lightbox.add(el.clone());
    lightbox.add(el.clone());
    assert!(el.class_list().contains("luxbox-zoom"));

    lightbox.remove(el.clone());
    assert!(!el.class_list().contains("luxbox-zoom"));
    // Removing an unregistered element is a no-op.
    lightbox.remove(el.clone());
    assert!(!el.class_list().contains("luxbox-zoom"));

    el.remove();
}

#[wasm_bindgen_test]
fn open_on_non_image_href_is_a_no_op() {
    let lightbox = Luxbox::new(JsValue::UNDEFINED).expect("construct");
    let el = anchor("/files/report.pdf");

    lightbox.open(el.clone()).expect("non-image open is not an error");
    assert!(!lightbox.is_open());
    // The state machine returned to closed, so a fresh open attempt is
    // not rejected as "already open".
    lightbox.open(el.clone()).expect("reopen attempt after no-op");
    assert!(!lightbox.is_open());

    el.remove();
}

#[wasm_bindgen_test]
fn close_while_closed_is_a_usage_error() {
    let lightbox = Luxbox::new(JsValue::UNDEFINED).expect("construct");
    assert!(lightbox.close().is_err());
}

#[wasm_bindgen_test]
fn open_shows_the_modal_and_close_errors_stop() {
    let lightbox = Luxbox::new(JsValue::UNDEFINED).expect("construct");
    let el = anchor("photo.png");

    lightbox.open(el.clone()).expect("open");
    assert!(lightbox.is_open());
    // Second open while opening/open is the usage error.
    assert!(lightbox.open(el.clone()).is_err());

    lightbox.close().expect("close");
    el.remove();
}

#[wasm_bindgen_test]
fn focus_restoration_tolerates_reentrant_api_calls() {
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let lightbox = Rc::new(Luxbox::new(JsValue::UNDEFINED).expect("construct"));
    let button: HtmlElement = document()
        .create_element("button")
        .expect("create button")
        .dyn_into()
        .expect("button is an html element");
    document()
        .body()
        .expect("body")
        .append_child(&button)
        .expect("append");

    // A host handler on the restored element that calls back into the
    // public API while the close is completing.
    let fired = Rc::new(Cell::new(false));
    let listener = {
        let lightbox = Rc::clone(&lightbox);
        let fired = Rc::clone(&fired);
        Closure::wrap(Box::new(move || {
            let _ = lightbox.is_open();
            fired.set(true);
        }) as Box<dyn FnMut()>)
    };
    button
        .add_event_listener_with_callback("focus", listener.as_ref().unchecked_ref())
        .expect("bind focus listener");

    button.focus().expect("focus button");
    fired.set(false);

    let el = anchor("photo.png");
    lightbox.open(el.clone()).expect("open");
    // Closing before the image loads completes synchronously and restores
    // focus to the button, firing its reentrant listener.
    lightbox.close().expect("close");
    assert!(fired.get());
    assert!(!lightbox.is_open());

    el.remove();
    button.remove();
}

#[wasm_bindgen_test]
fn close_before_load_detaches_the_onload_hook() {
    use wasm_bindgen::JsCast;

    let lightbox = Luxbox::new(JsValue::UNDEFINED).expect("construct");
    let el = anchor("photo.png");

    lightbox.open(el.clone()).expect("open");
    let image: HtmlElement = document()
        .query_selector(".luxbox__image img")
        .expect("query")
        .expect("pending image present")
        .dyn_into()
        .expect("image is an html element");
    assert!(image.onload().is_some());

    lightbox.close().expect("close before load");
    // A load finishing now must find nothing to call.
    assert!(image.onload().is_none());

    el.remove();
}

#[wasm_bindgen_test]
fn constructor_rejects_malformed_option_types() {
    let options = js_sys::JSON::parse(r#"{"threshold": "wide"}"#).expect("parse");
    assert!(Luxbox::new(options).is_err());
}
