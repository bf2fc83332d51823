use std::fmt;

use serde::{Deserialize, Serialize};

pub const MOBILE_MAX_WIDTH: f64 = 768.0;
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

pub const AUTOPLAY_INTERVAL_MS: u32 = 3000;
pub const SLIDE_TRANSITION_MS: u32 = 500;
pub const CARD_GAP_PX: f64 = 24.0;
pub const CLONES_NEEDED: usize = 3;
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;
pub const SETTLE_DELAY_MS: u32 = 100;

pub const NAV_SCROLL_THRESHOLD_PX: f64 = 80.0;
pub const FALLBACK_NAV_HEIGHT_PX: f64 = 80.0;

pub const REVEAL_THRESHOLD: f64 = 0.12;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -40px 0px";

pub const STATS_THRESHOLD: f64 = 0.3;
pub const COUNTER_DURATION_MS: f64 = 2000.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakpoints {
    pub mobile_max: f64,
    pub tablet_max: f64,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile_max: MOBILE_MAX_WIDTH,
            tablet_max: TABLET_MAX_WIDTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u32,
    pub transition_ms: u32,
    pub gap_px: f64,
    pub clones_needed: usize,
    pub swipe_threshold_px: f64,
    pub settle_delay_ms: u32,
    pub breakpoints: Breakpoints,
    pub track_selector: String,
    pub dots_selector: String,
    pub card_selector: String,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            transition_ms: SLIDE_TRANSITION_MS,
            gap_px: CARD_GAP_PX,
            clones_needed: CLONES_NEEDED,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            settle_delay_ms: SETTLE_DELAY_MS,
            breakpoints: Breakpoints::default(),
            track_selector: "#testimonialTrack".to_string(),
            dots_selector: "#testimonialDots".to_string(),
            card_selector: ".testimonial-card".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub navbar_selector: String,
    pub toggle_selector: String,
    pub links_selector: String,
    pub overlay_selector: String,
    pub dropdown_selector: String,
    pub dropdown_trigger_selector: String,
    pub anchor_selector: String,
    pub scroll_threshold_px: f64,
    pub fallback_nav_height_px: f64,
    /// Widths at or below this ignore dropdown hover.
    pub mobile_max_px: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            navbar_selector: "#navbar".to_string(),
            toggle_selector: "#menuToggle".to_string(),
            links_selector: "#main-nav".to_string(),
            overlay_selector: "#mobileOverlay".to_string(),
            dropdown_selector: ".dropdown".to_string(),
            dropdown_trigger_selector: ".dropdown-trigger".to_string(),
            anchor_selector: "a[href^=\"#\"]".to_string(),
            scroll_threshold_px: NAV_SCROLL_THRESHOLD_PX,
            fallback_nav_height_px: FALLBACK_NAV_HEIGHT_PX,
            mobile_max_px: MOBILE_MAX_WIDTH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: ".reveal, .reveal-up".to_string(),
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub section_selector: String,
    pub value_selector: String,
    pub threshold: f64,
    pub duration_ms: f64,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            section_selector: ".stats-section".to_string(),
            value_selector: ".stat-item h3".to_string(),
            threshold: STATS_THRESHOLD,
            duration_ms: COUNTER_DURATION_MS,
        }
    }
}

/// Tunables for every page feature. Any field missing from the JSON source
/// keeps its default.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub nav: NavConfig,
    pub reveal: RevealConfig,
    pub stats: StatsConfig,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let breakpoints = self.carousel.breakpoints;
        if !(breakpoints.mobile_max > 0.0 && breakpoints.mobile_max < breakpoints.tablet_max) {
            return Err(ConfigError::InvalidBreakpoints {
                mobile_max: breakpoints.mobile_max,
                tablet_max: breakpoints.tablet_max,
            });
        }
        if !(self.nav.mobile_max_px > 0.0) {
            return Err(ConfigError::InvalidBreakpoints {
                mobile_max: self.nav.mobile_max_px,
                tablet_max: breakpoints.tablet_max,
            });
        }
        for (field, value) in [
            ("carousel.autoplay_interval_ms", self.carousel.autoplay_interval_ms),
            // A 0ms transition never fires transitionend.
            ("carousel.transition_ms", self.carousel.transition_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::ZeroDuration { field });
            }
        }
        if !(self.stats.duration_ms > 0.0) {
            return Err(ConfigError::ZeroDuration {
                field: "stats.duration_ms",
            });
        }
        if self.carousel.clones_needed == 0 {
            return Err(ConfigError::NoClones);
        }
        if !(self.carousel.gap_px >= 0.0) {
            return Err(ConfigError::NegativeGap {
                value: self.carousel.gap_px,
            });
        }
        if !(self.carousel.swipe_threshold_px >= 0.0) {
            return Err(ConfigError::NegativeSwipeThreshold {
                value: self.carousel.swipe_threshold_px,
            });
        }
        for (field, value) in [
            ("reveal.threshold", self.reveal.threshold),
            ("stats.threshold", self.stats.threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidThreshold { field, value });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    Parse(String),
    InvalidBreakpoints { mobile_max: f64, tablet_max: f64 },
    ZeroDuration { field: &'static str },
    NoClones,
    NegativeGap { value: f64 },
    NegativeSwipeThreshold { value: f64 },
    InvalidThreshold { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid site config: {message}"),
            ConfigError::InvalidBreakpoints {
                mobile_max,
                tablet_max,
            } => write!(
                f,
                "breakpoints must satisfy 0 < mobile_max < tablet_max, got {mobile_max} and {tablet_max}"
            ),
            ConfigError::ZeroDuration { field } => write!(f, "{field} must be positive"),
            ConfigError::NoClones => write!(f, "carousel.clones_needed must be at least 1"),
            ConfigError::NegativeGap { value } => {
                write!(f, "carousel.gap_px must not be negative, got {value}")
            }
            ConfigError::NegativeSwipeThreshold { value } => {
                write!(f, "carousel.swipe_threshold_px must not be negative, got {value}")
            }
            ConfigError::InvalidThreshold { field, value } => {
                write!(f, "{field} must be within 0..=1, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = SiteConfig::from_json("{}").expect("parse");
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.carousel.autoplay_interval_ms, 3000);
        assert_eq!(config.carousel.swipe_threshold_px, 50.0);
        assert_eq!(config.nav.scroll_threshold_px, 80.0);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let raw = r#"{"carousel": {"gap_px": 16, "breakpoints": {"tablet_max": 1100}}}"#;
        let config = SiteConfig::from_json(raw).expect("parse");
        assert_eq!(config.carousel.gap_px, 16.0);
        assert_eq!(config.carousel.breakpoints.mobile_max, 768.0);
        assert_eq!(config.carousel.breakpoints.tablet_max, 1100.0);
        assert_eq!(config.carousel.clones_needed, 3);
        assert_eq!(config.stats, StatsConfig::default());
    }

    #[test]
    fn rejects_inverted_breakpoints() {
        let raw = r#"{"carousel": {"breakpoints": {"mobile_max": 1200, "tablet_max": 1024}}}"#;
        let err = SiteConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBreakpoints { .. }));
    }

    #[test]
    fn rejects_out_of_range_threshold() {
        let raw = r#"{"reveal": {"threshold": 1.5}}"#;
        let err = SiteConfig::from_json(raw).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidThreshold {
                field: "reveal.threshold",
                value: 1.5
            }
        );
    }

    #[test]
    fn rejects_zero_clones_and_zero_interval() {
        let err = SiteConfig::from_json(r#"{"carousel": {"clones_needed": 0}}"#).unwrap_err();
        assert_eq!(err, ConfigError::NoClones);
        let err =
            SiteConfig::from_json(r#"{"carousel": {"autoplay_interval_ms": 0}}"#).unwrap_err();
        assert!(err.to_string().contains("autoplay_interval_ms"));
    }

    #[test]
    fn rejects_zero_transition() {
        let err = SiteConfig::from_json(r#"{"carousel": {"transition_ms": 0}}"#).unwrap_err();
        assert_eq!(
            err,
            ConfigError::ZeroDuration {
                field: "carousel.transition_ms"
            }
        );
    }

    #[test]
    fn rejects_negative_swipe_threshold() {
        let err =
            SiteConfig::from_json(r#"{"carousel": {"swipe_threshold_px": -10}}"#).unwrap_err();
        assert_eq!(err, ConfigError::NegativeSwipeThreshold { value: -10.0 });
        let config = SiteConfig::from_json(r#"{"carousel": {"swipe_threshold_px": 0}}"#)
            .expect("zero threshold is allowed");
        assert_eq!(config.carousel.swipe_threshold_px, 0.0);
    }

    #[test]
    fn nav_mobile_cutoff_is_independent_of_carousel_breakpoints() {
        let raw = r#"{"carousel": {"breakpoints": {"mobile_max": 600}}}"#;
        let config = SiteConfig::from_json(raw).expect("parse");
        assert_eq!(config.carousel.breakpoints.mobile_max, 600.0);
        assert_eq!(config.nav.mobile_max_px, 768.0);

        let raw = r#"{"nav": {"mobile_max_px": 900}}"#;
        let config = SiteConfig::from_json(raw).expect("parse");
        assert_eq!(config.nav.mobile_max_px, 900.0);
        assert_eq!(config.carousel.breakpoints.mobile_max, 768.0);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SiteConfig::from_json("{carousel").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
