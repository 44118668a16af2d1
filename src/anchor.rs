//! In-page anchor links that scroll smoothly instead of jumping.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

/// What a click on an in-page link should do.
#[derive(Debug, PartialEq, Eq)]
pub enum AnchorClick<T> {
    /// Leave the browser's default navigation alone.
    Default,
    /// Prevent navigation and scroll to this element.
    ScrollTo(T),
}

/// The selector to look up for a fragment link, or `None` for bare `#` and
/// non-fragment hrefs.
pub fn scroll_target_selector(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.starts_with('#') && *h != "#")
}

/// Resolve a click on a link with `href`.
///
/// `find` maps a selector to an element. A miss keeps the default action.
pub fn resolve_click<T>(href: Option<&str>, find: impl FnOnce(&str) -> Option<T>) -> AnchorClick<T> {
    match scroll_target_selector(href).and_then(find) {
        Some(target) => AnchorClick::ScrollTo(target),
        None => AnchorClick::Default,
    }
}
