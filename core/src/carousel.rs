//! Testimonial carousel controller.
//!
//! The track holds the real cards followed by clones of the first few, so a
//! forward step from the last real card lands on a clone that looks exactly
//! like card 0. When that animation completes the controller snaps, without
//! animation, back to the real card 0. Backward navigation never enters the
//! clone range; it clamps at the first card.

use crate::config::{Breakpoints, CarouselConfig};
use crate::dimensions::{track_offset, CardMetrics};
use crate::swipe::SwipeDirection;
use crate::viewport::cards_per_view;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackTransition {
    /// `transition: none`; the transform applies in the same frame.
    Instant,
    Animated { duration_ms: u32 },
}

/// Everything the controller needs from the page. The DOM implementation lives
/// in the wasm crate; tests use a recording implementation.
pub trait CarouselView {
    /// Applies `exact_width` as both min-width and width to every real and cloned card.
    fn set_card_width(&mut self, exact_width: f64);
    fn set_track_offset(&mut self, offset_px: f64, transition: TrackTransition);
    /// Replaces the dot controls with `count` inactive dots.
    fn render_dots(&mut self, count: usize);
    /// Marks `index` active and every other dot inactive.
    fn set_active_dot(&mut self, index: usize);
    /// Cancels the pending autoplay tick and schedules a fresh interval.
    fn restart_autoplay(&mut self);
}

pub fn clone_count(original_count: usize, clones_needed: usize) -> usize {
    clones_needed.min(original_count)
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselState {
    pub current_index: usize,
    pub original_count: usize,
    pub clone_count: usize,
    pub cards_per_view: u8,
    /// Translation per slide in pixels (card width plus gap).
    pub card_width: f64,
    pub is_transitioning: bool,
    /// Reserved for hover-pause; nothing in the page sets it.
    pub is_paused: bool,
}

impl CarouselState {
    pub fn new(original_count: usize, clone_count: usize) -> Self {
        Self {
            current_index: 0,
            original_count,
            clone_count,
            cards_per_view: 1,
            card_width: 0.0,
            is_transitioning: false,
            is_paused: false,
        }
    }

    /// Real item shown at `current_index`; any clone maps to item 0.
    pub fn logical_index(&self) -> usize {
        if self.current_index >= self.original_count {
            0
        } else {
            self.current_index
        }
    }

    pub fn last_index(&self) -> usize {
        (self.original_count + self.clone_count).saturating_sub(1)
    }

    pub fn showing_clone(&self) -> bool {
        self.current_index >= self.original_count
    }
}

pub struct Carousel<V> {
    state: CarouselState,
    view: V,
    gap: f64,
    transition_ms: u32,
    breakpoints: Breakpoints,
}

impl<V: CarouselView> Carousel<V> {
    /// Returns `None` when there are no authored cards to rotate.
    pub fn new(original_count: usize, config: &CarouselConfig, view: V) -> Option<Self> {
        if original_count == 0 {
            return None;
        }
        let clones = clone_count(original_count, config.clones_needed);
        Some(Self {
            state: CarouselState::new(original_count, clones),
            view,
            gap: config.gap_px,
            transition_ms: config.transition_ms,
            breakpoints: config.breakpoints,
        })
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Re-measures card sizes and re-snaps the track at the current index.
    pub fn apply_dimensions(&mut self, container_width: f64, viewport_width: f64) -> CardMetrics {
        let per_view = cards_per_view(viewport_width, &self.breakpoints);
        let metrics = CardMetrics::compute(container_width, self.gap, per_view);
        self.state.cards_per_view = per_view;
        self.state.card_width = metrics.slide_step;
        self.view.set_card_width(metrics.exact_card_width);
        self.rebuild_dots();
        self.move_to_slide(false);
        metrics
    }

    /// One dot per authored card, independent of how many cards fit on screen.
    pub fn rebuild_dots(&mut self) {
        self.view.render_dots(self.state.original_count);
        self.update_dots();
    }

    pub fn update_dots(&mut self) {
        let logical = self.state.logical_index();
        self.view.set_active_dot(logical);
    }

    pub fn move_to_slide(&mut self, animate: bool) {
        let offset = track_offset(self.state.current_index, self.state.card_width);
        if animate {
            self.view.set_track_offset(
                offset,
                TrackTransition::Animated {
                    duration_ms: self.transition_ms,
                },
            );
            self.state.is_transitioning = true;
            self.update_dots();
        } else {
            self.view.set_track_offset(offset, TrackTransition::Instant);
        }
    }

    pub fn next_slide(&mut self) -> bool {
        if self.state.is_transitioning || self.state.current_index >= self.state.last_index() {
            return false;
        }
        self.state.current_index += 1;
        self.move_to_slide(true);
        true
    }

    /// Steps back one card. At the first card nothing moves: there is no
    /// backward wrap into the clone range.
    pub fn prev_slide(&mut self) -> bool {
        if self.state.is_transitioning || self.state.current_index == 0 {
            return false;
        }
        self.state.current_index -= 1;
        self.move_to_slide(true);
        true
    }

    /// Dot activation. Always restarts autoplay; moves only when `index`
    /// names a different real card.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.state.original_count {
            return false;
        }
        self.view.restart_autoplay();
        if index == self.state.current_index {
            return false;
        }
        self.state.current_index = index;
        self.move_to_slide(true);
        true
    }

    pub fn handle_swipe(&mut self, direction: SwipeDirection) -> bool {
        let moved = match direction {
            SwipeDirection::Left => self.next_slide(),
            SwipeDirection::Right => self.prev_slide(),
        };
        self.view.restart_autoplay();
        moved
    }

    pub fn autoplay_tick(&mut self) -> bool {
        if self.state.is_paused {
            return false;
        }
        self.next_slide()
    }

    /// Transition-completion signal. Returns `true` when the track was
    /// rewound from the clone range to the real first card.
    pub fn on_transition_end(&mut self) -> bool {
        self.state.is_transitioning = false;
        if !self.state.showing_clone() {
            return false;
        }
        self.state.current_index = 0;
        self.move_to_slide(false);
        self.view.set_active_dot(0);
        true
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.state.is_paused = paused;
    }
}
