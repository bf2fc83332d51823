/// A stat heading such as `"250+"` split into the number to count up to and
/// the text that rides along with it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatValue {
    pub target: u64,
    /// Every non-digit character of the original text, in order.
    pub suffix: String,
    pub original: String,
}

impl StatValue {
    /// `None` when the text carries no digits. Numbers past `u64::MAX`
    /// saturate.
    pub fn parse(text: &str) -> Option<Self> {
        let mut digits = text.chars().filter_map(|ch| ch.to_digit(10)).peekable();
        digits.peek()?;
        let target = digits.fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        });
        let suffix = text.chars().filter(|ch| !ch.is_ascii_digit()).collect();
        Some(Self {
            target,
            suffix,
            original: text.to_string(),
        })
    }
}

pub fn ease_out_cubic(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(3)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    pub done: bool,
}

#[derive(Clone, Debug)]
pub struct CounterAnimation {
    value: StatValue,
    start_ms: f64,
    duration_ms: f64,
}

impl CounterAnimation {
    pub fn new(value: StatValue, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            value,
            start_ms,
            duration_ms,
        }
    }

    pub fn frame(&self, now_ms: f64) -> CounterFrame {
        let progress = if self.duration_ms > 0.0 {
            ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return CounterFrame {
                text: self.value.original.clone(),
                done: true,
            };
        }
        let current = (ease_out_cubic(progress) * self.value.target as f64).round() as u64;
        CounterFrame {
            text: format!("{current}{}", self.value.suffix),
            done: false,
        }
    }
}

/// Fires once, the first time the stats section becomes visible.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatsLatch {
    counted: bool,
}

impl StatsLatch {
    pub fn trigger(&mut self, is_intersecting: bool) -> bool {
        if !is_intersecting || self.counted {
            return false;
        }
        self.counted = true;
        true
    }
}
