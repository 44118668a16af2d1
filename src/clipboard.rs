//! Copy-to-clipboard with a fallback for browsers lacking the async API.
//!
//! TRADE-OFFS
//! ==========
//! Success always shows a toast; failure is logged and only surfaces to the
//! user when `notify_copy_failure` is configured.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use crate::consts::{COPIED_MESSAGE, COPY_FAILED_MESSAGE};
use crate::error::GlueError;
use crate::toast::ToastKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed(String),
}

/// The browser's asynchronous clipboard (`navigator.clipboard`).
pub trait AsyncCopy {
    /// Start writing `text`; `on_done` receives the outcome once settled.
    fn write_text(&self, text: &str, on_done: Box<dyn FnOnce(CopyOutcome)>);
}

/// Legacy copy through a temporary, invisible text field.
///
/// A copy command that reports `false` without throwing counts as a failure.
pub trait LegacyCopy {
    type Field;

    /// Create the hidden field holding `text` and attach it to the page.
    ///
    /// # Errors
    ///
    /// Returns an error when the field cannot be created or attached.
    fn insert_field(&self, text: &str) -> Result<Self::Field, GlueError>;

    /// Select the field's content and run the copy command.
    ///
    /// # Errors
    ///
    /// Returns an error when the browser refuses the copy.
    fn copy_selection(&self, field: &Self::Field) -> Result<(), GlueError>;

    fn remove_field(&self, field: Self::Field);
}

/// Copy `text` through the temporary field. The field is removed whether or
/// not the copy succeeded.
pub fn copy_with_fallback<L: LegacyCopy>(host: &L, text: &str) -> CopyOutcome {
    let field = match host.insert_field(text) {
        Ok(field) => field,
        Err(err) => return CopyOutcome::Failed(err.to_string()),
    };
    let outcome = match host.copy_selection(&field) {
        Ok(()) => CopyOutcome::Copied,
        Err(err) => CopyOutcome::Failed(err.to_string()),
    };
    host.remove_field(field);
    outcome
}

/// Copy `text` through the async API when present, else the legacy field.
///
/// `on_done` is called exactly once with the outcome.
pub fn copy_text<A: AsyncCopy, L: LegacyCopy>(
    async_api: Option<&A>,
    legacy: &L,
    text: &str,
    on_done: Box<dyn FnOnce(CopyOutcome)>,
) {
    match async_api {
        Some(api) => api.write_text(text, on_done),
        None => {
            log::debug!("async clipboard unavailable, using execCommand fallback");
            on_done(copy_with_fallback(legacy, text));
        }
    }
}

/// Tell the user (or the log) how a copy went.
pub fn report_outcome(outcome: &CopyOutcome, notify_failure: bool, toast: impl FnOnce(&str, ToastKind)) {
    match outcome {
        CopyOutcome::Copied => toast(COPIED_MESSAGE, ToastKind::Success),
        CopyOutcome::Failed(reason) => {
            log::error!("{COPY_FAILED_MESSAGE}: {reason}");
            if notify_failure {
                toast(COPY_FAILED_MESSAGE, ToastKind::Danger);
            }
        }
    }
}
