//! JavaScript surface of the crate.
//!
//! The host page creates one `ForumPage` and calls helpers on it:
//!
//! ```js
//! import init, { ForumPage } from "./forum_glue.js";
//! await init();
//! window.forum = ForumPage.init(document.getElementById("page-config")?.textContent);
//! ```

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use super::clipboard::{BrowserClipboard, DocumentCopy, async_clipboard};
use super::fields::FileInput;
use super::{BrowserDialogs, ToastContainer, as_html, document, init_page};
use crate::clipboard::{copy_text, report_outcome};
use crate::config::PageConfig;
use crate::dialogs::confirm_delete;
use crate::preview::preview_image;
use crate::schedule::TimeoutScheduler;
use crate::textarea::auto_resize;
use crate::time_ago::time_ago;
use crate::toast::{ToastKind, show_toast};
use crate::upload::{validate_file_extension, validate_file_size};

/// Enhanced page: settings plus the document and toast container they apply to.
#[wasm_bindgen]
pub struct ForumPage {
    document: Document,
    config: PageConfig,
    toasts: ToastContainer,
}

#[wasm_bindgen]
impl ForumPage {
    /// Parse settings, start logging and enhance the current document.
    ///
    /// # Errors
    ///
    /// Throws on invalid settings or when no document is available.
    #[wasm_bindgen(js_name = init)]
    pub fn init(config_json: Option<String>) -> Result<ForumPage, JsValue> {
        console_error_panic_hook::set_once();
        let config = PageConfig::from_json(config_json.as_deref())?;
        if let Some(level) = config.log_level() {
            if console_log::init_with_level(level).is_err() {
                log::debug!("logger already installed");
            }
        }
        let page = Self::with_document(document()?, config);
        init_page(&page.document, &page.config)?;
        Ok(page)
    }

    #[wasm_bindgen(js_name = confirmDelete)]
    pub fn confirm_delete(&self, message: Option<String>) -> Result<bool, JsValue> {
        Ok(confirm_delete(&BrowserDialogs::new()?, message.as_deref()))
    }

    /// Preview the selected image in the element with id `preview_id`.
    ///
    /// # Errors
    ///
    /// Throws when the file read cannot be started.
    #[wasm_bindgen(js_name = previewImage)]
    pub fn preview_image(&self, input: &HtmlInputElement, preview_id: String) -> Result<(), JsValue> {
        let document = self.document.clone();
        let lookup = move || -> Option<HtmlElement> {
            let element = document.get_element_by_id(&preview_id)?;
            as_html(element).ok()
        };
        preview_image(&FileInput(input), lookup)?;
        Ok(())
    }

    /// Reject files over `max_size_mb` (the configured limit when omitted).
    #[wasm_bindgen(js_name = validateFileSize)]
    pub fn validate_file_size(&self, input: &HtmlInputElement, max_size_mb: Option<f64>) -> Result<bool, JsValue> {
        let limit = max_size_mb.unwrap_or(self.config.max_upload_mb);
        Ok(validate_file_size(&FileInput(input), &BrowserDialogs::new()?, limit))
    }

    #[wasm_bindgen(js_name = validateFileExtension)]
    pub fn validate_file_extension(&self, input: &HtmlInputElement) -> Result<bool, JsValue> {
        Ok(validate_file_extension(
            &FileInput(input),
            &BrowserDialogs::new()?,
            &self.config.allowed_extensions,
        ))
    }

    #[wasm_bindgen(js_name = autoResize)]
    pub fn auto_resize(&self, textarea: &HtmlElement) {
        auto_resize(textarea);
    }

    /// Relative time for a `Date`, a millisecond timestamp or a date string.
    #[wasm_bindgen(js_name = timeAgo)]
    pub fn time_ago(&self, date: &JsValue) -> String {
        time_ago(js_sys::Date::now(), js_sys::Date::new(date).get_time())
    }

    /// Copy `text` and report the outcome with a toast once it settles.
    #[wasm_bindgen(js_name = copyToClipboard)]
    pub fn copy_to_clipboard(&self, text: String) {
        let toasts = self.toasts.clone();
        let lifetime_ms = self.config.toast_lifetime_ms;
        let notify_failure = self.config.notify_copy_failure;
        let async_api = async_clipboard().map(BrowserClipboard);
        let legacy = DocumentCopy { document: &self.document };
        copy_text(
            async_api.as_ref(),
            &legacy,
            &text,
            Box::new(move |outcome| {
                report_outcome(&outcome, notify_failure, |message, kind| {
                    toast_or_log(&toasts, message, kind, lifetime_ms);
                });
            }),
        );
    }

    /// Show a toast; `kind` is a Bootstrap contextual name, `success` by default.
    ///
    /// # Errors
    ///
    /// Throws when the container cannot be created.
    #[wasm_bindgen(js_name = showToast)]
    pub fn show_toast(&self, message: &str, kind: Option<String>) -> Result<(), JsValue> {
        let kind = ToastKind::from_name_or_default(kind.as_deref());
        show_toast(&self.toasts, &TimeoutScheduler, message, kind, self.config.toast_lifetime_ms)?;
        Ok(())
    }
}

impl ForumPage {
    /// Bind settings to `document` without touching the page.
    pub fn with_document(document: Document, config: PageConfig) -> Self {
        let toasts = ToastContainer::new(document.clone(), config.toast_container_id.clone());
        Self { document, config, toasts }
    }
}

fn toast_or_log(toasts: &ToastContainer, message: &str, kind: ToastKind, lifetime_ms: u32) {
    if let Err(err) = show_toast(toasts, &TimeoutScheduler, message, kind, lifetime_ms) {
        log::warn!("could not show toast: {err}");
    }
}
