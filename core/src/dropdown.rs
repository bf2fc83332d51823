use crate::viewport::is_mobile;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DropdownChange {
    pub index: usize,
    pub open: bool,
}

/// Open state for every `.dropdown` on the page. Click toggling is exclusive;
/// hover only applies above the mobile breakpoint.
#[derive(Clone, Debug)]
pub struct DropdownSet {
    open: Vec<bool>,
    mobile_max: f64,
}

impl DropdownSet {
    pub fn new(count: usize, mobile_max: f64) -> Self {
        Self {
            open: vec![false; count],
            mobile_max,
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, index: usize) -> Vec<DropdownChange> {
        if index >= self.open.len() {
            return Vec::new();
        }
        let mut changes = Vec::new();
        for (other, open) in self.open.iter_mut().enumerate() {
            if other != index && *open {
                *open = false;
                changes.push(DropdownChange {
                    index: other,
                    open: false,
                });
            }
        }
        let next = !self.open[index];
        self.open[index] = next;
        changes.push(DropdownChange { index, open: next });
        changes
    }

    pub fn close_all(&mut self) -> Vec<DropdownChange> {
        let mut changes = Vec::new();
        for (index, open) in self.open.iter_mut().enumerate() {
            if *open {
                *open = false;
                changes.push(DropdownChange { index, open: false });
            }
        }
        changes
    }

    pub fn pointer_enter(&mut self, index: usize, viewport_width: f64) -> Option<DropdownChange> {
        self.set_hover(index, viewport_width, true)
    }

    pub fn pointer_leave(&mut self, index: usize, viewport_width: f64) -> Option<DropdownChange> {
        self.set_hover(index, viewport_width, false)
    }

    fn set_hover(&mut self, index: usize, viewport_width: f64, open: bool) -> Option<DropdownChange> {
        if is_mobile(viewport_width, self.mobile_max) {
            return None;
        }
        let slot = self.open.get_mut(index)?;
        if *slot == open {
            return None;
        }
        *slot = open;
        Some(DropdownChange { index, open })
    }
}
