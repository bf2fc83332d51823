#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left; advances to the next slide.
    Left,
    /// Finger moved left to right; steps back, clamped at the first slide.
    Right,
}

pub fn classify_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<SwipeDirection> {
    let delta = start_x - end_x;
    if delta > threshold {
        Some(SwipeDirection::Left)
    } else if -delta > threshold {
        Some(SwipeDirection::Right)
    } else {
        None
    }
}

/// Tracks one horizontal touch gesture between `touchstart` and `touchend`.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold: f64,
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            start_x: None,
        }
    }

    pub fn begin(&mut self, screen_x: f64) {
        self.start_x = Some(screen_x);
    }

    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    pub fn finish(&mut self, screen_x: f64) -> Option<SwipeDirection> {
        let start_x = self.start_x.take()?;
        classify_swipe(start_x, screen_x, self.threshold)
    }
}
