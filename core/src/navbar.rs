pub fn is_scrolled(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

/// Remembers the last applied `scrolled` class so scroll events only touch
/// the DOM when the state flips.
#[derive(Clone, Copy, Debug)]
pub struct NavScrollState {
    threshold: f64,
    scrolled: Option<bool>,
}

impl NavScrollState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: None,
        }
    }

    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let next = is_scrolled(scroll_y, self.threshold);
        if self.scrolled == Some(next) {
            return None;
        }
        self.scrolled = Some(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_exclusive() {
        assert!(!is_scrolled(0.0, 80.0));
        assert!(!is_scrolled(80.0, 80.0));
        assert!(is_scrolled(80.5, 80.0));
    }

    #[test]
    fn first_update_always_applies() {
        let mut state = NavScrollState::new(80.0);
        assert_eq!(state.update(0.0), Some(false));
        assert_eq!(state.update(40.0), None);
        assert_eq!(state.update(200.0), Some(true));
        assert_eq!(state.update(300.0), None);
        assert_eq!(state.update(10.0), Some(false));
    }
}
