use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use tekrok_site_core::anchor::{anchor_target, scroll_target_top};
use tekrok_site_core::NavConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::dom::{self, SetupError};
use crate::nav::SharedMenu;

pub(crate) struct AnchorBinding {
    _listeners: Vec<EventListener>,
}

pub(crate) fn install(
    document: &Document,
    config: &NavConfig,
    navbar: Option<Element>,
    menu: Option<SharedMenu>,
) -> Result<AnchorBinding, SetupError> {
    let anchors = dom::query_all(document, &config.anchor_selector);
    if anchors.is_empty() {
        return Err(SetupError::MissingElement {
            selector: config.anchor_selector.clone(),
        });
    }
    let navbar = navbar.and_then(|navbar| navbar.dyn_into::<HtmlElement>().ok());
    let fallback_height = config.fallback_nav_height_px;
    let listeners = anchors
        .into_iter()
        .map(|anchor| {
            let source = anchor.clone();
            let navbar = navbar.clone();
            let menu = menu.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions {
                    phase: EventListenerPhase::Bubble,
                    passive: false,
                },
                move |event: &Event| {
                    let Some(href) = source.get_attribute("href") else {
                        return;
                    };
                    let Some(selector) = anchor_target(&href) else {
                        return;
                    };
                    let Ok(document) = dom::document() else {
                        return;
                    };
                    let Some(target) = dom::query_optional(&document, selector) else {
                        return;
                    };
                    event.prevent_default();
                    if let Some(menu) = menu.as_ref() {
                        menu.borrow_mut().close();
                    }
                    let nav_height = navbar
                        .as_ref()
                        .map(|navbar| f64::from(navbar.offset_height()))
                        .unwrap_or(fallback_height);
                    scroll_to(&target, nav_height);
                },
            )
        })
        .collect();
    Ok(AnchorBinding {
        _listeners: listeners,
    })
}

fn scroll_to(target: &Element, nav_height: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let page_y_offset = window.page_y_offset().unwrap_or(0.0);
    let top = scroll_target_top(target.get_bounding_client_rect().top(), page_y_offset, nav_height);
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
