use std::cell::RefCell;

use gloo::events::EventListener;

use crate::carousel_view::{self, CarouselBinding};
use crate::dom::{self, SetupError};
use crate::nav::{self, DropdownBinding, MenuBinding, NavbarBinding};
use crate::page_config;
use crate::reveal::{self, RevealBinding};
use crate::smooth_scroll::{self, AnchorBinding};
use crate::stats::{self, StatsBinding};

/// Listeners, observers and timers for every feature found on the page.
/// Dropping a binding detaches it, so they live here until unload.
#[allow(dead_code)]
#[derive(Default)]
struct PageBindings {
    menu: Option<MenuBinding>,
    dropdowns: Option<DropdownBinding>,
    escape: Option<EventListener>,
    navbar: Option<NavbarBinding>,
    anchors: Option<AnchorBinding>,
    reveal: Option<RevealBinding>,
    stats: Option<StatsBinding>,
    carousel: Option<CarouselBinding>,
}

thread_local! {
    static PAGE: RefCell<Option<PageBindings>> = RefCell::new(None);
}

pub(crate) fn boot() {
    let already_booted = PAGE.with(|slot| slot.borrow().is_some());
    if already_booted {
        return;
    }
    let document = match dom::document() {
        Ok(document) => document,
        Err(err) => {
            gloo::console::warn!("page: boot aborted", err.to_string());
            return;
        }
    };
    let config = page_config::load(&document);

    let mut page = PageBindings::default();
    page.menu = feature("menu", nav::install_menu(&document, &config.nav));
    page.dropdowns = feature("dropdowns", nav::install_dropdowns(&document, &config.nav));
    page.escape = Some(nav::install_escape(
        &document,
        page.menu.as_ref().map(|binding| binding.menu.clone()),
        page.dropdowns.as_ref().map(|binding| binding.dropdowns.clone()),
    ));
    page.navbar = feature("navbar", nav::install_navbar_scroll(&document, &config.nav));
    page.anchors = feature(
        "anchors",
        smooth_scroll::install(
            &document,
            &config.nav,
            page.navbar.as_ref().map(|binding| binding.navbar.clone()),
            page.menu.as_ref().map(|binding| binding.menu.clone()),
        ),
    );
    page.reveal = feature("reveal", reveal::install(&document, &config.reveal));
    page.stats = feature("stats", stats::install(&document, &config.stats));
    page.carousel = feature("carousel", carousel_view::install(&document, &config.carousel));

    PAGE.with(|slot| {
        *slot.borrow_mut() = Some(page);
    });
}

fn feature<T>(name: &str, result: Result<T, SetupError>) -> Option<T> {
    match result {
        Ok(binding) => Some(binding),
        Err(err) => {
            gloo::console::log!(format!("{name}: skipped"), err.to_string());
            None
        }
    }
}
