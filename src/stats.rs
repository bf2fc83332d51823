use std::cell::RefCell;
use std::rc::Rc;

use gloo::render::{request_animation_frame, AnimationFrame};
use js_sys::Array;
use tekrok_site_core::{CounterAnimation, StatValue, StatsConfig, StatsLatch};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, IntersectionObserver};

use crate::dom::{self, IntersectionCallback, SetupError};

/// One heading counting up, re-scheduling itself every animation frame until done.
struct CounterRun {
    element: HtmlElement,
    animation: CounterAnimation,
    frame: RefCell<Option<AnimationFrame>>,
}

impl CounterRun {
    fn schedule(self: &Rc<Self>) {
        let run = Rc::clone(self);
        let handle = request_animation_frame(move |timestamp| run.tick(timestamp));
        *self.frame.borrow_mut() = Some(handle);
    }

    fn tick(self: &Rc<Self>, timestamp: f64) {
        self.frame.borrow_mut().take();
        let frame = self.animation.frame(timestamp);
        self.element.set_inner_text(&frame.text);
        if !frame.done {
            self.schedule();
        }
    }
}

pub(crate) struct StatsBinding {
    _observer: IntersectionObserver,
    _callback: IntersectionCallback,
    _runs: Rc<RefCell<Vec<Rc<CounterRun>>>>,
}

pub(crate) fn install(document: &Document, config: &StatsConfig) -> Result<StatsBinding, SetupError> {
    let section = dom::query(document, &config.section_selector)?;
    if !dom::intersection_observer_supported() {
        return Err(SetupError::Js {
            context: "stats",
            message: "IntersectionObserver unavailable".to_string(),
        });
    }
    let runs = Rc::new(RefCell::new(Vec::new()));
    let mut latch = StatsLatch::default();
    let value_selector = config.value_selector.clone();
    let duration_ms = config.duration_ms;

    let callback = {
        let section = section.clone();
        let runs = runs.clone();
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                let Some(entry) = dom::intersection_entries(&entries).into_iter().next() else {
                    return;
                };
                if !latch.trigger(entry.is_intersecting()) {
                    return;
                }
                observer.disconnect();
                let started = start_counters(&section, &value_selector, duration_ms);
                runs.borrow_mut().extend(started);
            },
        )
    };
    let observer = dom::intersection_observer(&callback, config.threshold, None)?;
    observer.observe(&section);
    Ok(StatsBinding {
        _observer: observer,
        _callback: callback,
        _runs: runs,
    })
}

fn start_counters(section: &Element, value_selector: &str, duration_ms: f64) -> Vec<Rc<CounterRun>> {
    let now = now_ms();
    dom::query_all_within(section, value_selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<HtmlElement>().ok())
        .filter_map(|element| {
            let value = StatValue::parse(&element.inner_text())?;
            let run = Rc::new(CounterRun {
                element,
                animation: CounterAnimation::new(value, now, duration_ms),
                frame: RefCell::new(None),
            });
            run.schedule();
            Some(run)
        })
        .collect()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}
