use tekrok_site_core::carousel::{Carousel, CarouselView, TrackTransition};
use tekrok_site_core::config::CarouselConfig;
use tekrok_site_core::swipe::{SwipeDirection, SwipeTracker};

#[derive(Default)]
struct PageView {
    card_width: f64,
    offset: f64,
    last_transition: Option<TrackTransition>,
    dots: Vec<bool>,
    restarts: usize,
}

impl PageView {
    fn active_dots(&self) -> Vec<usize> {
        self.dots
            .iter()
            .enumerate()
            .filter_map(|(index, active)| active.then_some(index))
            .collect()
    }
}

impl CarouselView for PageView {
    fn set_card_width(&mut self, exact_width: f64) {
        self.card_width = exact_width;
    }

    fn set_track_offset(&mut self, offset_px: f64, transition: TrackTransition) {
        self.offset = offset_px;
        self.last_transition = Some(transition);
    }

    fn render_dots(&mut self, count: usize) {
        self.dots = vec![false; count];
    }

    fn set_active_dot(&mut self, index: usize) {
        for (slot, active) in self.dots.iter_mut().enumerate() {
            *active = slot == index;
        }
    }

    fn restart_autoplay(&mut self) {
        self.restarts += 1;
    }
}

fn build(count: usize, viewport_width: f64) -> Carousel<PageView> {
    let config = CarouselConfig::default();
    let mut carousel = Carousel::new(count, &config, PageView::default()).expect("cards");
    carousel.apply_dimensions(viewport_width.min(1200.0), viewport_width);
    carousel
}

fn step(carousel: &mut Carousel<PageView>) -> bool {
    let moved = carousel.autoplay_tick();
    carousel.on_transition_end();
    moved
}

#[test]
fn dot_count_ignores_cards_per_view() {
    for width in [375.0, 900.0, 1440.0] {
        let carousel = build(5, width);
        assert_eq!(carousel.view().dots.len(), 5);
        assert_eq!(carousel.view().active_dots(), vec![0]);
    }
    assert_eq!(build(5, 375.0).state().cards_per_view, 1);
    assert_eq!(build(5, 900.0).state().cards_per_view, 2);
    assert_eq!(build(5, 1440.0).state().cards_per_view, 3);
}

#[test]
fn dimension_routine_is_idempotent() {
    let mut carousel = build(6, 1200.0);
    carousel.autoplay_tick();
    carousel.on_transition_end();
    carousel.apply_dimensions(1200.0, 1200.0);
    let first = (carousel.view().offset, carousel.view().card_width);
    carousel.apply_dimensions(1200.0, 1200.0);
    let second = (carousel.view().offset, carousel.view().card_width);
    assert_eq!(first, second);
    assert_eq!(first, (-408.0, 384.0));
    assert_eq!(carousel.view().last_transition, Some(TrackTransition::Instant));
}

#[test]
fn resize_keeps_index_and_rescales_offset() {
    let mut carousel = build(6, 1200.0);
    step(&mut carousel);
    step(&mut carousel);
    carousel.apply_dimensions(700.0, 700.0);
    assert_eq!(carousel.state().current_index, 2);
    assert_eq!(carousel.state().cards_per_view, 1);
    assert_eq!(carousel.view().card_width, 700.0);
    assert_eq!(carousel.view().offset, -1448.0);
    assert_eq!(carousel.view().active_dots(), vec![2]);
}

#[test]
fn each_step_tracks_its_dot() {
    let mut carousel = build(6, 1200.0);
    for n in 1..6 {
        assert!(step(&mut carousel));
        assert_eq!(carousel.state().current_index, n);
        assert_eq!(carousel.view().active_dots(), vec![n]);
    }
}

#[test]
fn full_cycle_wraps_exactly_once() {
    let mut carousel = build(4, 1200.0);
    let mut wraps = 0;
    for _ in 0..4 {
        carousel.autoplay_tick();
        if carousel.on_transition_end() {
            wraps += 1;
        }
    }
    assert_eq!(wraps, 1);
    assert_eq!(carousel.state().current_index, 0);
    assert_eq!(carousel.view().active_dots(), vec![0]);
    assert_eq!(carousel.view().offset, 0.0);
    assert!(!carousel.state().is_transitioning);
}

#[test]
fn next_slide_waits_for_transition_end() {
    let mut carousel = build(6, 1200.0);
    assert!(carousel.next_slide());
    assert!(!carousel.next_slide());
    assert!(!carousel.autoplay_tick());
    assert_eq!(carousel.state().current_index, 1);
    carousel.on_transition_end();
    assert!(carousel.next_slide());
    assert_eq!(carousel.state().current_index, 2);
}

#[test]
fn small_swipes_never_move() {
    let mut carousel = build(6, 400.0);
    let mut tracker = SwipeTracker::new(CarouselConfig::default().swipe_threshold_px);
    for (start, end) in [(200.0, 150.0), (150.0, 200.0), (10.0, 59.0)] {
        tracker.begin(start);
        assert_eq!(tracker.finish(end), None);
    }
    assert_eq!(carousel.state().current_index, 0);
    assert_eq!(carousel.view().restarts, 0);
    carousel.on_transition_end();
    assert_eq!(carousel.state().current_index, 0);
}

#[test]
fn left_swipe_matches_next_slide() {
    let mut swiped = build(6, 1200.0);
    let mut ticked = build(6, 1200.0);
    let mut tracker = SwipeTracker::new(50.0);
    tracker.begin(300.0);
    let direction = tracker.finish(120.0).expect("swipe");
    assert_eq!(direction, SwipeDirection::Left);
    assert!(swiped.handle_swipe(direction));
    assert!(ticked.next_slide());
    assert_eq!(swiped.state(), ticked.state());
    assert_eq!(swiped.view().offset, ticked.view().offset);
    assert_eq!(swiped.view().restarts, 1);
}

#[test]
fn right_swipe_at_start_stays_put() {
    let mut carousel = build(6, 1200.0);
    assert!(!carousel.handle_swipe(SwipeDirection::Right));
    assert_eq!(carousel.state().current_index, 0);
    assert_eq!(carousel.view().restarts, 1);
    step(&mut carousel);
    step(&mut carousel);
    assert!(carousel.handle_swipe(SwipeDirection::Right));
    assert_eq!(carousel.state().current_index, 1);
}

#[test]
fn dot_click_then_autoplay_enters_clone_range_and_rewinds() {
    let mut carousel = build(6, 1200.0);
    assert_eq!(carousel.state().cards_per_view, 3);

    assert!(carousel.go_to(4));
    assert_eq!(carousel.state().current_index, 4);
    assert!(carousel.state().is_transitioning);
    assert_eq!(carousel.view().active_dots(), vec![4]);
    assert_eq!(carousel.view().restarts, 1);
    assert!(!carousel.on_transition_end());

    assert!(carousel.autoplay_tick());
    assert_eq!(carousel.state().current_index, 5);
    assert!(!carousel.on_transition_end());

    assert!(carousel.autoplay_tick());
    assert_eq!(carousel.state().current_index, 6);
    assert_eq!(carousel.view().active_dots(), vec![0]);
    assert_eq!(
        carousel.view().last_transition,
        Some(TrackTransition::Animated { duration_ms: 500 })
    );

    assert!(carousel.on_transition_end());
    assert_eq!(carousel.state().current_index, 0);
    assert_eq!(carousel.view().active_dots(), vec![0]);
    assert_eq!(carousel.view().last_transition, Some(TrackTransition::Instant));
    assert_eq!(carousel.view().offset, 0.0);
}
