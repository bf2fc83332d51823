use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use tekrok_site_core::menu::is_escape;
use tekrok_site_core::{DropdownChange, DropdownSet, Menu, MenuView, NavConfig, NavScrollState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::dom::{self, SetupError};

pub(crate) type SharedMenu = Rc<RefCell<Menu<DomMenuView>>>;

pub(crate) struct DomMenuView {
    links: Element,
    toggle: Element,
    overlay: Option<Element>,
    body: Option<HtmlElement>,
}

impl MenuView for DomMenuView {
    fn set_links_active(&mut self, active: bool) {
        dom::set_class(&self.links, "active", active);
    }

    fn set_toggle_active(&mut self, active: bool) {
        dom::set_class(&self.toggle, "active", active);
    }

    fn set_overlay_active(&mut self, active: bool) {
        if let Some(overlay) = self.overlay.as_ref() {
            dom::set_class(overlay, "active", active);
        }
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(body) = self.body.as_ref() else {
            return;
        };
        let value = if locked { "hidden" } else { "" };
        let _ = body.style().set_property("overflow", value);
    }
}

pub(crate) struct MenuBinding {
    pub(crate) menu: SharedMenu,
    _listeners: Vec<EventListener>,
}

pub(crate) fn install_menu(document: &Document, config: &NavConfig) -> Result<MenuBinding, SetupError> {
    let toggle = dom::query(document, &config.toggle_selector)?;
    let links = dom::query(document, &config.links_selector)?;
    let overlay = dom::query_optional(document, &config.overlay_selector);
    let menu = Rc::new(RefCell::new(Menu::new(DomMenuView {
        links,
        toggle: toggle.clone(),
        overlay: overlay.clone(),
        body: document.body(),
    })));

    let mut listeners = Vec::new();
    let menu_for_toggle = menu.clone();
    listeners.push(EventListener::new(&toggle, "click", move |event: &Event| {
        event.stop_propagation();
        menu_for_toggle.borrow_mut().toggle();
    }));
    if let Some(overlay) = overlay {
        let menu_for_overlay = menu.clone();
        listeners.push(EventListener::new(&overlay, "click", move |_event: &Event| {
            menu_for_overlay.borrow_mut().close();
        }));
    }
    Ok(MenuBinding {
        menu,
        _listeners: listeners,
    })
}

#[derive(Clone)]
pub(crate) struct Dropdowns {
    set: Rc<RefCell<DropdownSet>>,
    elements: Rc<Vec<Element>>,
}

impl Dropdowns {
    fn apply(&self, changes: Vec<DropdownChange>) {
        for change in changes {
            if let Some(element) = self.elements.get(change.index) {
                dom::set_class(element, "open", change.open);
            }
        }
    }

    fn index_of(&self, element: &Element) -> Option<usize> {
        self.elements.iter().position(|candidate| candidate == element)
    }

    pub(crate) fn close_all(&self) {
        let changes = self.set.borrow_mut().close_all();
        self.apply(changes);
    }
}

pub(crate) struct DropdownBinding {
    pub(crate) dropdowns: Dropdowns,
    _listeners: Vec<EventListener>,
}

pub(crate) fn install_dropdowns(
    document: &Document,
    config: &NavConfig,
) -> Result<DropdownBinding, SetupError> {
    let elements = dom::query_all(document, &config.dropdown_selector);
    if elements.is_empty() {
        return Err(SetupError::MissingElement {
            selector: config.dropdown_selector.clone(),
        });
    }
    let dropdowns = Dropdowns {
        set: Rc::new(RefCell::new(DropdownSet::new(elements.len(), config.mobile_max_px))),
        elements: Rc::new(elements),
    };
    let mut listeners = Vec::new();

    for trigger in dom::query_all(document, &config.dropdown_trigger_selector) {
        let Some(index) = trigger
            .closest(&config.dropdown_selector)
            .ok()
            .flatten()
            .and_then(|dropdown| dropdowns.index_of(&dropdown))
        else {
            continue;
        };
        let dropdowns = dropdowns.clone();
        listeners.push(EventListener::new_with_options(
            &trigger,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                event.prevent_default();
                event.stop_propagation();
                let changes = dropdowns.set.borrow_mut().toggle(index);
                dropdowns.apply(changes);
            },
        ));
    }

    for (index, element) in dropdowns.elements.iter().enumerate() {
        let for_enter = dropdowns.clone();
        listeners.push(EventListener::new(element, "mouseenter", move |_event: &Event| {
            let change = for_enter
                .set
                .borrow_mut()
                .pointer_enter(index, dom::viewport_width());
            for_enter.apply(change.into_iter().collect());
        }));
        let for_leave = dropdowns.clone();
        listeners.push(EventListener::new(element, "mouseleave", move |_event: &Event| {
            let change = for_leave
                .set
                .borrow_mut()
                .pointer_leave(index, dom::viewport_width());
            for_leave.apply(change.into_iter().collect());
        }));
    }

    let for_outside = dropdowns.clone();
    let dropdown_selector = config.dropdown_selector.clone();
    listeners.push(EventListener::new(document, "click", move |event: &Event| {
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|target| target.closest(&dropdown_selector).ok().flatten())
            .is_some();
        if !inside {
            for_outside.close_all();
        }
    }));

    Ok(DropdownBinding {
        dropdowns,
        _listeners: listeners,
    })
}

/// Escape closes the mobile menu and every dropdown, whichever of them exist.
pub(crate) fn install_escape(
    document: &Document,
    menu: Option<SharedMenu>,
    dropdowns: Option<Dropdowns>,
) -> EventListener {
    EventListener::new(document, "keydown", move |event: &Event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if !is_escape(&event.key()) {
            return;
        }
        if let Some(menu) = menu.as_ref() {
            menu.borrow_mut().close();
        }
        if let Some(dropdowns) = dropdowns.as_ref() {
            dropdowns.close_all();
        }
    })
}

pub(crate) struct NavbarBinding {
    pub(crate) navbar: Element,
    _listener: EventListener,
}

pub(crate) fn install_navbar_scroll(document: &Document, config: &NavConfig) -> Result<NavbarBinding, SetupError> {
    let navbar = dom::query(document, &config.navbar_selector)?;
    let window = dom::window()?;
    let state = Rc::new(RefCell::new(NavScrollState::new(config.scroll_threshold_px)));

    let apply = {
        let navbar = navbar.clone();
        let state = state.clone();
        move || {
            let scroll_y = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            if let Some(scrolled) = state.borrow_mut().update(scroll_y) {
                dom::set_class(&navbar, "scrolled", scrolled);
            }
        }
    };
    apply();
    let listener = EventListener::new_with_options(
        &window,
        "scroll",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |_event: &Event| apply(),
    );
    Ok(NavbarBinding {
        navbar,
        _listener: listener,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;
    use web_sys::KeyboardEventInit;

    wasm_bindgen_test_configure!(run_in_browser);

    fn fixture(prefix: &str) -> (Element, NavConfig) {
        let document = dom::document().expect("document available");
        let root = document.create_element("header").expect("create fixture root");
        root.set_inner_html(&format!(
            r#"<button id="{prefix}-toggle"></button>
            <ul id="{prefix}-links">
              <li class="{prefix}-dropdown"><a class="{prefix}-trigger" href="/a">A</a></li>
              <li class="{prefix}-dropdown"><a class="{prefix}-trigger" href="/b">B</a></li>
            </ul>
            <div id="{prefix}-overlay"></div>"#
        ));
        document
            .body()
            .expect("body available")
            .append_child(&root)
            .expect("append fixture");
        let config = NavConfig {
            toggle_selector: format!("#{prefix}-toggle"),
            links_selector: format!("#{prefix}-links"),
            overlay_selector: format!("#{prefix}-overlay"),
            dropdown_selector: format!(".{prefix}-dropdown"),
            dropdown_trigger_selector: format!(".{prefix}-trigger"),
            ..NavConfig::default()
        };
        (root, config)
    }

    fn click(document: &Document, selector: &str) {
        dom::query(document, selector)
            .expect("fixture element")
            .dyn_into::<HtmlElement>()
            .expect("html element")
            .click();
    }

    fn has_class(document: &Document, selector: &str, class: &str) -> bool {
        dom::query(document, selector)
            .expect("fixture element")
            .class_list()
            .contains(class)
    }

    #[wasm_bindgen_test]
    fn escape_closes_menu_and_dropdowns() {
        let (root, config) = fixture("esc");
        let document = dom::document().expect("document available");
        let menu = install_menu(&document, &config).expect("menu installs");
        let dropdowns = install_dropdowns(&document, &config).expect("dropdowns install");
        let escape = install_escape(
            &document,
            Some(menu.menu.clone()),
            Some(dropdowns.dropdowns.clone()),
        );

        click(&document, &config.toggle_selector);
        click(&document, &config.dropdown_trigger_selector);
        assert!(menu.menu.borrow().is_open());
        assert!(has_class(&document, &config.links_selector, "active"));
        assert!(has_class(&document, &config.overlay_selector, "active"));
        assert!(has_class(&document, &config.dropdown_selector, "open"));

        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        document.dispatch_event(&event).expect("dispatch keydown");

        assert!(!menu.menu.borrow().is_open());
        assert!(!has_class(&document, &config.links_selector, "active"));
        assert!(!has_class(&document, &config.toggle_selector, "active"));
        assert!(!has_class(&document, &config.overlay_selector, "active"));
        for dropdown in dom::query_all(&document, &config.dropdown_selector) {
            assert!(!dropdown.class_list().contains("open"));
        }

        drop(escape);
        drop(dropdowns);
        drop(menu);
        root.remove();
    }

    #[wasm_bindgen_test]
    fn other_keys_leave_menu_open() {
        let (root, config) = fixture("keys");
        let document = dom::document().expect("document available");
        let menu = install_menu(&document, &config).expect("menu installs");
        let escape = install_escape(&document, Some(menu.menu.clone()), None);

        click(&document, &config.toggle_selector);
        let init = KeyboardEventInit::new();
        init.set_key("Enter");
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("keyboard event");
        document.dispatch_event(&event).expect("dispatch keydown");
        assert!(menu.menu.borrow().is_open());

        drop(escape);
        drop(menu);
        root.remove();
    }
}
