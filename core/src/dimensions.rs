/// Card sizing derived from the measured track container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardMetrics {
    pub cards_per_view: u8,
    /// Width applied to every card, real and cloned.
    pub exact_card_width: f64,
    /// Distance the track moves per slide: one card plus one gap.
    pub slide_step: f64,
}

impl CardMetrics {
    pub fn compute(container_width: f64, gap: f64, cards_per_view: u8) -> Self {
        let per_view = f64::from(cards_per_view.max(1));
        let gaps = (per_view - 1.0) * gap;
        let exact_card_width = ((container_width - gaps) / per_view).max(0.0);
        Self {
            cards_per_view,
            exact_card_width,
            slide_step: exact_card_width + gap,
        }
    }
}

pub fn track_offset(index: usize, slide_step: f64) -> f64 {
    0.0 - index as f64 * slide_step
}

pub fn translate_x(offset_px: f64) -> String {
    format!("translateX({offset_px}px)")
}
