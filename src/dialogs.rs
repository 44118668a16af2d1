//! Blocking browser dialogs and the delete confirmation prompt.

#[cfg(test)]
#[path = "dialogs_test.rs"]
mod dialogs_test;

use crate::consts::DEFAULT_DELETE_PROMPT;

/// Modal prompts owned by the host window.
pub trait Dialogs {
    /// Ask a yes/no question; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// Prompt text for a delete confirmation. Empty messages use the default.
pub fn delete_prompt(message: Option<&str>) -> &str {
    match message {
        Some(text) if !text.is_empty() => text,
        _ => DEFAULT_DELETE_PROMPT,
    }
}

/// Ask the user to confirm a delete and return their choice.
pub fn confirm_delete(dialogs: &impl Dialogs, message: Option<&str>) -> bool {
    dialogs.confirm(delete_prompt(message))
}
