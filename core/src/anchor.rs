/// In-page anchor target for `href`, as a selector (`"#pricing"`).
/// Bare `"#"` and non-fragment links are left to the browser.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href == "#" || !href.starts_with('#') {
        return None;
    }
    Some(href)
}

/// Document-space scroll position that puts the target just below the fixed navbar.
pub fn scroll_target_top(rect_top: f64, page_y_offset: f64, nav_height: f64) -> f64 {
    rect_top + page_y_offset - nav_height
}
