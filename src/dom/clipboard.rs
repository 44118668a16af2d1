//! Async Clipboard API with an `execCommand("copy")` fallback.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Clipboard, Document, HtmlDocument, HtmlTextAreaElement};

use super::{body, set_styles, window};
use crate::clipboard::{AsyncCopy, CopyOutcome, LegacyCopy};
use crate::consts::HIDDEN_COPY_FIELD_STYLE;
use crate::error::GlueError;

/// `navigator.clipboard`, when the browser exposes it.
pub(crate) fn async_clipboard() -> Option<Clipboard> {
    let navigator = window().ok()?.navigator();
    let value = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard")).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    value.dyn_into::<Clipboard>().ok()
}

/// `navigator.clipboard.writeText`, settled on the local executor.
pub(crate) struct BrowserClipboard(pub Clipboard);

impl AsyncCopy for BrowserClipboard {
    fn write_text(&self, text: &str, on_done: Box<dyn FnOnce(CopyOutcome)>) {
        let promise = self.0.write_text(text);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match JsFuture::from(promise).await {
                Ok(_) => CopyOutcome::Copied,
                Err(err) => CopyOutcome::Failed(format!("{err:?}")),
            };
            on_done(outcome);
        });
    }
}

/// Hidden textarea copy against a specific document.
pub(crate) struct DocumentCopy<'a> {
    pub document: &'a Document,
}

impl LegacyCopy for DocumentCopy<'_> {
    type Field = HtmlTextAreaElement;

    fn insert_field(&self, text: &str) -> Result<HtmlTextAreaElement, GlueError> {
        let field = self
            .document
            .create_element("textarea")?
            .dyn_into::<HtmlTextAreaElement>()
            .map_err(|_| GlueError::WrongElement("TEXTAREA".to_owned()))?;
        field.set_value(text);
        set_styles(&field, &HIDDEN_COPY_FIELD_STYLE)?;
        body(self.document)?.append_child(&field)?;
        Ok(field)
    }

    fn copy_selection(&self, field: &HtmlTextAreaElement) -> Result<(), GlueError> {
        field.select();
        let html_document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| GlueError::Dom("document does not support execCommand".to_owned()))?;
        if html_document.exec_command("copy")? {
            Ok(())
        } else {
            Err(GlueError::Dom("copy command was not executed".to_owned()))
        }
    }

    fn remove_field(&self, field: HtmlTextAreaElement) {
        field.remove();
    }
}
