//! DOM-backed toast container.

use web_sys::{Document, HtmlElement};

use super::{as_html, body, set_styles};
use crate::consts::TOAST_CONTAINER_STYLE;
use crate::error::GlueError;
use crate::toast::ToastHost;

/// Handle to the toast stack, identified by element id.
///
/// The element is looked up on every toast and created on first use, so a
/// container rendered by the server template is reused as is.
#[derive(Clone)]
pub struct ToastContainer {
    document: Document,
    id: String,
}

impl ToastContainer {
    pub fn new(document: Document, id: impl Into<String>) -> Self {
        Self { document, id: id.into() }
    }

    /// The container element, created and attached to the body if absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the element cannot be created or attached.
    pub fn resolve(&self) -> Result<HtmlElement, GlueError> {
        if let Some(existing) = self.document.get_element_by_id(&self.id) {
            return as_html(existing);
        }
        let container = as_html(self.document.create_element("div")?)?;
        container.set_id(&self.id);
        set_styles(&container, &TOAST_CONTAINER_STYLE)?;
        body(&self.document)?.append_child(&container)?;
        log::debug!("created toast container #{}", self.id);
        Ok(container)
    }

    fn build_toast(&self, class_name: &str, message: &str) -> Result<HtmlElement, GlueError> {
        let toast = as_html(self.document.create_element("div")?)?;
        toast.set_class_name(class_name);
        toast.set_attribute("role", "alert")?;
        toast.append_child(&self.document.create_text_node(message))?;

        let close = self.document.create_element("button")?;
        close.set_attribute("type", "button")?;
        close.set_class_name("btn-close");
        close.set_attribute("data-bs-dismiss", "alert")?;
        close.set_attribute("aria-label", "Close")?;
        toast.append_child(&close)?;
        Ok(toast)
    }
}

impl ToastHost for ToastContainer {
    type Toast = HtmlElement;

    fn append_toast(&self, class_name: &str, message: &str) -> Result<HtmlElement, GlueError> {
        let container = self.resolve()?;
        let toast = self.build_toast(class_name, message)?;
        container.append_child(&toast)?;
        Ok(toast)
    }

    fn remove_toast(toast: &HtmlElement) {
        toast.remove();
    }
}
