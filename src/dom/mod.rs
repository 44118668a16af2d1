//! Browser bindings for the page helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything under this module talks to `web-sys` and only builds with the
//! `hydrate` feature. It implements the small capability traits the
//! feature modules are written against and exposes the result to the host
//! page as the `ForumPage` class.

mod clipboard;
mod exports;
mod fields;
mod page;
mod toast;

pub use exports::ForumPage;
pub use page::init_page;
pub use toast::ToastContainer;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::dialogs::Dialogs;
use crate::error::GlueError;

pub(crate) fn window() -> Result<Window, GlueError> {
    web_sys::window().ok_or(GlueError::NoWindow)
}

pub(crate) fn document() -> Result<Document, GlueError> {
    window()?.document().ok_or(GlueError::NoDocument)
}

pub(crate) fn body(document: &Document) -> Result<HtmlElement, GlueError> {
    document.body().ok_or(GlueError::NoBody)
}

/// All elements matching `selector`, in document order.
pub(crate) fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, GlueError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn set_styles(element: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), GlueError> {
    let style = element.style();
    for (name, value) in styles {
        style.set_property(name, value)?;
    }
    Ok(())
}

pub(crate) fn as_html(element: Element) -> Result<HtmlElement, GlueError> {
    let tag = element.tag_name();
    element.dyn_into::<HtmlElement>().map_err(|_| GlueError::WrongElement(tag))
}

/// `window.confirm` / `window.alert`.
pub struct BrowserDialogs {
    window: Window,
}

impl BrowserDialogs {
    /// # Errors
    ///
    /// Returns [`GlueError::NoWindow`] outside a browser window.
    pub fn new() -> Result<Self, GlueError> {
        Ok(Self { window: window()? })
    }
}

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or_else(|err| {
            log::warn!("confirm dialog failed: {err:?}");
            false
        })
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            log::warn!("alert dialog failed: {err:?}");
        }
    }
}
