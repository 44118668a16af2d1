use super::*;

#[test]
fn permanent_alerts_opt_out_of_auto_dismiss() {
    assert_eq!(DISMISSIBLE_ALERT_SELECTOR, ".alert:not(.alert-permanent)");
}

#[test]
fn page_markup_selectors() {
    assert_eq!(AUTO_RESIZE_SELECTOR, "textarea.auto-resize");
    assert_eq!(ANCHOR_LINK_SELECTOR, "a[href^=\"#\"]");
    assert_eq!(TOAST_CONTAINER_ID, "toast-container");
}

#[test]
fn timed_removal_delays() {
    assert_eq!(ALERT_DISMISS_MS, 5000);
    assert_eq!(TOAST_LIFETIME_MS, 3000);
}

#[test]
fn toast_container_is_pinned_top_right_above_content() {
    assert_eq!(
        TOAST_CONTAINER_STYLE,
        [("position", "fixed"), ("top", "20px"), ("right", "20px"), ("z-index", "9999")]
    );
}
