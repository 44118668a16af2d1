use super::*;

fn page(selector: &str) -> Option<&'static str> {
    match selector {
        "#replies" => Some("replies-section"),
        _ => None,
    }
}

#[test]
fn fragment_link_with_target_scrolls() {
    assert_eq!(resolve_click(Some("#replies"), page), AnchorClick::ScrollTo("replies-section"));
}

#[test]
fn missing_target_keeps_default_navigation() {
    assert_eq!(resolve_click(Some("#missing-id"), page), AnchorClick::Default);
}

#[test]
fn bare_hash_is_never_looked_up() {
    let click = resolve_click(Some("#"), |_: &str| -> Option<()> { panic!("bare # must not be resolved") });
    assert_eq!(click, AnchorClick::Default);
}

#[test]
fn non_fragment_hrefs_are_ignored() {
    assert_eq!(scroll_target_selector(Some("/forum/topic/3#post-9")), None);
    assert_eq!(scroll_target_selector(None), None);
    assert_eq!(scroll_target_selector(Some("#post-9")), Some("#post-9"));
}
