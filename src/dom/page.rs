//! Page-ready wiring: alert auto-dismiss, textarea sizing, anchor scrolling.
//!
//! DESIGN
//! ======
//! The host page calls [`init_page`] once with the document to enhance. No
//! `DOMContentLoaded` listener is registered here; the host decides when the
//! document is ready.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{as_html, query_all};
use crate::alerts::schedule_auto_dismiss;
use crate::anchor::{AnchorClick, resolve_click};
use crate::config::PageConfig;
use crate::consts::{ANCHOR_LINK_SELECTOR, AUTO_RESIZE_SELECTOR, DISMISSIBLE_ALERT_SELECTOR};
use crate::error::GlueError;
use crate::schedule::TimeoutScheduler;
use crate::textarea::auto_resize;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Alert)]
    type BootstrapAlert;

    #[wasm_bindgen(constructor, catch, js_namespace = bootstrap, js_class = "Alert")]
    fn new(element: &Element) -> Result<BootstrapAlert, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn close(this: &BootstrapAlert) -> Result<(), JsValue>;
}

/// Close an alert through Bootstrap so its fade-out runs.
fn close_alert(alert: Element) {
    match BootstrapAlert::new(&alert) {
        Ok(instance) => {
            if let Err(err) = instance.close() {
                log::debug!("bootstrap alert close failed: {err:?}");
            }
        }
        Err(err) => log::debug!("bootstrap alert unavailable: {err:?}"),
    }
}

/// Enhance `document`. Call once per page.
///
/// # Errors
///
/// Returns an error when a selector query or listener registration fails.
pub fn init_page(document: &Document, config: &PageConfig) -> Result<(), GlueError> {
    let alerts = query_all(document, DISMISSIBLE_ALERT_SELECTOR)?;
    let dismissing = schedule_auto_dismiss(&TimeoutScheduler, alerts, config.alert_dismiss_ms, close_alert);

    let textareas = bind_auto_resize(document)?;
    let anchors = bind_anchor_scrolling(document)?;

    log::info!("page ready: {dismissing} alerts to dismiss, {textareas} auto-resize fields, {anchors} anchor links");
    Ok(())
}

fn bind_auto_resize(document: &Document) -> Result<usize, GlueError> {
    let fields = query_all(document, AUTO_RESIZE_SELECTOR)?;
    let count = fields.len();
    for field in fields {
        let field: HtmlElement = as_html(field)?;
        let target = field.clone();
        let on_input = Closure::<dyn FnMut(Event)>::new(move |_event: Event| auto_resize(&target));
        field.add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
        on_input.forget();
        auto_resize(&field);
    }
    Ok(count)
}

fn bind_anchor_scrolling(document: &Document) -> Result<usize, GlueError> {
    let links = query_all(document, ANCHOR_LINK_SELECTOR)?;
    let count = links.len();
    for link in links {
        let document = document.clone();
        let href_source = link.clone();
        let on_click = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let href = href_source.get_attribute("href");
            let click = resolve_click(href.as_deref(), |selector| match document.query_selector(selector) {
                Ok(found) => found,
                Err(err) => {
                    log::debug!("anchor `{selector}` is not a valid selector: {err:?}");
                    None
                }
            });
            if let AnchorClick::ScrollTo(target) = click {
                event.prevent_default();
                scroll_smoothly(&target);
            }
        });
        link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(count)
}

fn scroll_smoothly(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
