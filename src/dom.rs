use std::fmt;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, NodeList, Window,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SetupError {
    NoWindow,
    MissingElement { selector: String },
    Js { context: &'static str, message: String },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::NoWindow => write!(f, "window or document unavailable"),
            SetupError::MissingElement { selector } => write!(f, "no element matches {selector}"),
            SetupError::Js { context, message } => write!(f, "{context}: {message}"),
        }
    }
}

impl std::error::Error for SetupError {}

pub(crate) fn js_err(context: &'static str) -> impl FnOnce(JsValue) -> SetupError {
    move |error| SetupError::Js {
        context,
        message: js_message(&error),
    }
}

fn js_message(error: &JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

pub(crate) fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub(crate) fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoWindow)
}

pub(crate) fn query(document: &Document, selector: &str) -> Result<Element, SetupError> {
    query_optional(document, selector).ok_or_else(|| SetupError::MissingElement {
        selector: selector.to_string(),
    })
}

/// Invalid selectors count as "not found".
pub(crate) fn query_optional(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    document
        .query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub(crate) fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

pub(crate) fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub(crate) fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        let _ = element.style().set_property(property, value);
    }
}

pub(crate) fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(0.0)
}

pub(crate) type IntersectionCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

pub(crate) fn intersection_observer_supported() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

pub(crate) fn intersection_observer(
    callback: &IntersectionCallback,
    threshold: f64,
    root_margin: Option<&str>,
) -> Result<IntersectionObserver, SetupError> {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(root_margin) = root_margin {
        options.set_root_margin(root_margin);
    }
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
        .map_err(js_err("intersection observer"))
}

pub(crate) fn intersection_entries(entries: &Array) -> Vec<IntersectionObserverEntry> {
    entries
        .iter()
        .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
        .collect()
}
