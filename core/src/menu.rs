pub const ESCAPE_KEY: &str = "Escape";

/// Element state a mobile menu toggles.
pub trait MenuView {
    fn set_links_active(&mut self, active: bool);
    fn set_toggle_active(&mut self, active: bool);
    /// No-op when the page has no overlay.
    fn set_overlay_active(&mut self, active: bool);
    fn set_scroll_locked(&mut self, locked: bool);
}

pub struct Menu<V> {
    open: bool,
    view: V,
}

impl<V: MenuView> Menu<V> {
    pub fn new(view: V) -> Self {
        Self { open: false, view }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn open(&mut self) {
        self.open = true;
        self.apply();
    }

    /// Always re-applies the closed state, so stray `active` classes are cleared too.
    pub fn close(&mut self) {
        self.open = false;
        self.apply();
    }

    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    fn apply(&mut self) {
        let open = self.open;
        self.view.set_links_active(open);
        self.view.set_toggle_active(open);
        self.view.set_overlay_active(open);
        self.view.set_scroll_locked(open);
    }
}

pub fn is_escape(key: &str) -> bool {
    key == ESCAPE_KEY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug, PartialEq)]
    struct Classes {
        links: bool,
        toggle: bool,
        overlay: bool,
        locked: bool,
        writes: usize,
    }

    impl MenuView for Classes {
        fn set_links_active(&mut self, active: bool) {
            self.links = active;
            self.writes += 1;
        }

        fn set_toggle_active(&mut self, active: bool) {
            self.toggle = active;
        }

        fn set_overlay_active(&mut self, active: bool) {
            self.overlay = active;
        }

        fn set_scroll_locked(&mut self, locked: bool) {
            self.locked = locked;
        }
    }

    #[test]
    fn toggle_opens_then_closes() {
        let mut menu = Menu::new(Classes::default());
        assert!(menu.toggle());
        let view = menu.view();
        assert!(view.links && view.toggle && view.overlay && view.locked);
        assert!(!menu.toggle());
        let view = menu.view();
        assert!(!view.links && !view.toggle && !view.overlay && !view.locked);
    }

    #[test]
    fn close_is_applied_even_when_already_closed() {
        let mut menu = Menu::new(Classes::default());
        menu.close();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.view().writes, 2);
    }

    #[test]
    fn only_escape_dismisses() {
        assert!(is_escape("Escape"));
        assert!(!is_escape("Esc"));
        assert!(!is_escape("Enter"));
    }
}
