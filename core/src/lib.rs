pub mod anchor;
pub mod carousel;
pub mod config;
pub mod counter;
pub mod dimensions;
pub mod dropdown;
pub mod menu;
pub mod navbar;
pub mod swipe;
pub mod viewport;

pub use carousel::{Carousel, CarouselState, CarouselView, TrackTransition};
pub use config::{
    Breakpoints, CarouselConfig, ConfigError, NavConfig, RevealConfig, SiteConfig, StatsConfig,
};
pub use counter::{CounterAnimation, CounterFrame, StatValue, StatsLatch};
pub use dimensions::CardMetrics;
pub use dropdown::{DropdownChange, DropdownSet};
pub use menu::{Menu, MenuView};
pub use navbar::NavScrollState;
pub use swipe::{SwipeDirection, SwipeTracker};
