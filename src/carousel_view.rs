use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::{Interval, Timeout};
use tekrok_site_core::carousel::clone_count;
use tekrok_site_core::dimensions::translate_x;
use tekrok_site_core::{Carousel, CarouselConfig, CarouselView, SwipeTracker, TrackTransition};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, TouchEvent};

use crate::dom::{self, js_err, SetupError};

pub(crate) const CLONE_CLASS: &str = "clone";
pub(crate) const DOT_CLASS: &str = "dot";
pub(crate) const ACTIVE_CLASS: &str = "active";

pub(crate) type SharedCarousel = Rc<RefCell<Carousel<DomCarouselView>>>;
type CarouselHandle = Weak<RefCell<Carousel<DomCarouselView>>>;

pub(crate) struct DomCarouselView {
    document: Document,
    track: Element,
    dots_container: Element,
    /// Real cards followed by their clones.
    cards: Vec<Element>,
    dots: Vec<Element>,
    dot_listeners: Vec<EventListener>,
    autoplay: Option<Interval>,
    autoplay_interval_ms: u32,
    handle: CarouselHandle,
}

impl DomCarouselView {
    fn bind(&mut self, handle: CarouselHandle) {
        self.handle = handle;
    }
}

impl CarouselView for DomCarouselView {
    fn set_card_width(&mut self, exact_width: f64) {
        let value = format!("{exact_width}px");
        for card in &self.cards {
            dom::set_style(card, "min-width", &value);
            dom::set_style(card, "width", &value);
        }
    }

    fn set_track_offset(&mut self, offset_px: f64, transition: TrackTransition) {
        let transition = match transition {
            TrackTransition::Instant => "none".to_string(),
            TrackTransition::Animated { duration_ms } => format!("transform {duration_ms}ms ease"),
        };
        dom::set_style(&self.track, "transition", &transition);
        dom::set_style(&self.track, "transform", &translate_x(offset_px));
    }

    fn render_dots(&mut self, count: usize) {
        self.dot_listeners.clear();
        self.dots.clear();
        self.dots_container.set_inner_html("");
        for index in 0..count {
            let Ok(dot) = self.document.create_element("button") else {
                continue;
            };
            dot.set_class_name(DOT_CLASS);
            let _ = dot.set_attribute("type", "button");
            let _ = dot.set_attribute("aria-label", &format!("Go to slide {}", index + 1));
            let handle = self.handle.clone();
            self.dot_listeners
                .push(EventListener::new(&dot, "click", move |_event: &Event| {
                    if let Some(carousel) = handle.upgrade() {
                        carousel.borrow_mut().go_to(index);
                    }
                }));
            if self.dots_container.append_child(&dot).is_ok() {
                self.dots.push(dot);
            }
        }
    }

    fn set_active_dot(&mut self, index: usize) {
        for (slot, dot) in self.dots.iter().enumerate() {
            dom::set_class(dot, ACTIVE_CLASS, slot == index);
        }
    }

    fn restart_autoplay(&mut self) {
        self.autoplay.take();
        let handle = self.handle.clone();
        self.autoplay = Some(Interval::new(self.autoplay_interval_ms, move || {
            if let Some(carousel) = handle.upgrade() {
                carousel.borrow_mut().autoplay_tick();
            }
        }));
    }
}

pub(crate) struct CarouselBinding {
    #[allow(dead_code)]
    pub(crate) carousel: SharedCarousel,
    _listeners: Vec<EventListener>,
    _settle: Timeout,
}

pub(crate) fn install(document: &Document, config: &CarouselConfig) -> Result<CarouselBinding, SetupError> {
    let track = dom::query(document, &config.track_selector)?;
    let dots_container = dom::query(document, &config.dots_selector)?;
    let real_cards = dom::query_all_within(&track, &config.card_selector);
    let original_count = real_cards.len();
    let clones = append_clones(
        &track,
        &real_cards,
        clone_count(original_count, config.clones_needed),
    )?;
    let mut cards = real_cards;
    cards.extend(clones);

    let view = DomCarouselView {
        document: document.clone(),
        track: track.clone(),
        dots_container,
        cards,
        dots: Vec::new(),
        dot_listeners: Vec::new(),
        autoplay: None,
        autoplay_interval_ms: config.autoplay_interval_ms,
        handle: Weak::new(),
    };
    let Some(carousel) = Carousel::new(original_count, config, view) else {
        return Err(SetupError::MissingElement {
            selector: config.card_selector.clone(),
        });
    };
    let carousel = Rc::new(RefCell::new(carousel));
    carousel.borrow_mut().view_mut().bind(Rc::downgrade(&carousel));
    {
        let mut carousel = carousel.borrow_mut();
        carousel.apply_dimensions(container_width(&track), dom::viewport_width());
        carousel.view_mut().restart_autoplay();
    }

    let mut listeners = Vec::new();
    let window = dom::window()?;
    let for_resize = carousel.clone();
    let track_for_resize = track.clone();
    listeners.push(EventListener::new(&window, "resize", move |_event: &Event| {
        for_resize
            .borrow_mut()
            .apply_dimensions(container_width(&track_for_resize), dom::viewport_width());
    }));

    let for_end = carousel.clone();
    let track_for_end = track.clone();
    listeners.push(EventListener::new(&track, "transitionend", move |event: &Event| {
        let from_track = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .is_some_and(|target| target == track_for_end);
        if from_track {
            for_end.borrow_mut().on_transition_end();
        }
    }));

    let swipe = Rc::new(RefCell::new(SwipeTracker::new(config.swipe_threshold_px)));
    let swipe_for_start = swipe.clone();
    listeners.push(EventListener::new_with_options(
        &track,
        "touchstart",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |event: &Event| {
            if let Some(screen_x) = touch_screen_x(event) {
                swipe_for_start.borrow_mut().begin(screen_x);
            }
        },
    ));
    let swipe_for_end = swipe.clone();
    let for_swipe = carousel.clone();
    listeners.push(EventListener::new_with_options(
        &track,
        "touchend",
        EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        },
        move |event: &Event| {
            let Some(screen_x) = touch_screen_x(event) else {
                swipe_for_end.borrow_mut().cancel();
                return;
            };
            let direction = swipe_for_end.borrow_mut().finish(screen_x);
            if let Some(direction) = direction {
                for_swipe.borrow_mut().handle_swipe(direction);
            }
        },
    ));
    let swipe_for_cancel = swipe;
    listeners.push(EventListener::new(&track, "touchcancel", move |_event: &Event| {
        swipe_for_cancel.borrow_mut().cancel();
    }));

    // Stylesheets can land after the first measurement.
    let for_settle = carousel.clone();
    let track_for_settle = track;
    let settle = Timeout::new(config.settle_delay_ms, move || {
        for_settle
            .borrow_mut()
            .apply_dimensions(container_width(&track_for_settle), dom::viewport_width());
    });

    gloo::console::log!("carousel: ready", original_count as u32);
    Ok(CarouselBinding {
        carousel,
        _listeners: listeners,
        _settle: settle,
    })
}

fn append_clones(track: &Element, real_cards: &[Element], count: usize) -> Result<Vec<Element>, SetupError> {
    real_cards
        .iter()
        .take(count)
        .map(|card| {
            let clone = card
                .clone_node_with_deep(true)
                .map_err(js_err("clone card"))?
                .dyn_into::<Element>()
                .map_err(|_| SetupError::Js {
                    context: "clone card",
                    message: "clone is not an element".to_string(),
                })?;
            clone.remove_attribute("id").map_err(js_err("clone card"))?;
            clone
                .set_attribute("aria-hidden", "true")
                .map_err(js_err("clone card"))?;
            dom::set_class(&clone, CLONE_CLASS, true);
            track.append_child(&clone).map_err(js_err("append clone"))?;
            Ok(clone)
        })
        .collect()
}

/// Width of the element the track scrolls inside.
fn container_width(track: &Element) -> f64 {
    track
        .parent_element()
        .unwrap_or_else(|| track.clone())
        .get_bounding_client_rect()
        .width()
}

fn touch_screen_x(event: &Event) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touch = event.changed_touches().get(0)?;
    Some(f64::from(touch.screen_x()))
}
