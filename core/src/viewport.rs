use crate::config::Breakpoints;

/// Number of testimonial cards visible side by side at `viewport_width`.
pub fn cards_per_view(viewport_width: f64, breakpoints: &Breakpoints) -> u8 {
    if is_mobile(viewport_width, breakpoints.mobile_max) {
        1
    } else if viewport_width <= breakpoints.tablet_max {
        2
    } else {
        3
    }
}

pub fn is_mobile(viewport_width: f64, mobile_max: f64) -> bool {
    viewport_width <= mobile_max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_are_inclusive_upper_bounds() {
        let breakpoints = Breakpoints::default();
        assert_eq!(cards_per_view(320.0, &breakpoints), 1);
        assert_eq!(cards_per_view(768.0, &breakpoints), 1);
        assert_eq!(cards_per_view(769.0, &breakpoints), 2);
        assert_eq!(cards_per_view(1024.0, &breakpoints), 2);
        assert_eq!(cards_per_view(1025.0, &breakpoints), 3);
        assert_eq!(cards_per_view(2560.0, &breakpoints), 3);
    }

    #[test]
    fn fractional_widths_fall_on_the_right_side() {
        let breakpoints = Breakpoints::default();
        assert_eq!(cards_per_view(768.5, &breakpoints), 2);
        assert_eq!(cards_per_view(1024.25, &breakpoints), 3);
        assert!(is_mobile(768.0, breakpoints.mobile_max));
        assert!(!is_mobile(768.5, breakpoints.mobile_max));
    }
}
