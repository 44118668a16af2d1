//! Grow-to-fit textareas.

#[cfg(test)]
#[path = "textarea_test.rs"]
mod textarea_test;

/// A multi-line field whose height follows its content.
pub trait ResizableField {
    fn set_height(&self, value: &str);
    /// Content height in CSS pixels, measured with the current height.
    fn scroll_height(&self) -> i32;
}

pub fn height_px(scroll_height: i32) -> String {
    format!("{scroll_height}px")
}

/// Collapse to `auto` so `scrollHeight` reflects the content, then pin the
/// height to it.
pub fn auto_resize(field: &impl ResizableField) {
    field.set_height("auto");
    field.set_height(&height_px(field.scroll_height()));
}
