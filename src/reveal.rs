use js_sys::Array;
use tekrok_site_core::RevealConfig;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, IntersectionObserver};

use crate::dom::{self, IntersectionCallback, SetupError};

pub(crate) const REVEALED_CLASS: &str = "active";

pub(crate) struct RevealBinding {
    _observer: Option<IntersectionObserver>,
    _callback: Option<IntersectionCallback>,
}

pub(crate) fn install(document: &Document, config: &RevealConfig) -> Result<RevealBinding, SetupError> {
    let elements = dom::query_all(document, &config.selector);
    if elements.is_empty() {
        return Err(SetupError::MissingElement {
            selector: config.selector.clone(),
        });
    }
    if !dom::intersection_observer_supported() {
        for element in &elements {
            dom::set_class(element, REVEALED_CLASS, true);
        }
        return Ok(RevealBinding {
            _observer: None,
            _callback: None,
        });
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in dom::intersection_entries(&entries) {
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                dom::set_class(&target, REVEALED_CLASS, true);
                observer.unobserve(&target);
            }
        },
    );
    let observer = dom::intersection_observer(&callback, config.threshold, Some(&config.root_margin))?;
    for element in &elements {
        observer.observe(element);
    }
    Ok(RevealBinding {
        _observer: Some(observer),
        _callback: Some(callback),
    })
}
