//! Toast notifications stacked in a fixed container.
//!
//! DESIGN
//! ======
//! A toast is a Bootstrap dismissible alert appended to the container and
//! removed by a one-shot timer. The container itself is resolved by the
//! [`ToastHost`] implementation (looked up by id, created when absent), so
//! nothing here holds a global handle.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::fmt;
use std::str::FromStr;

use crate::error::GlueError;
use crate::schedule::Scheduler;

/// Contextual style of a toast: `alert-{kind}`.
///
/// Bootstrap's built-in names have variants; any other single class token
/// is kept as [`ToastKind::Custom`] for theme colors a page defines itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Danger,
    Warning,
    Info,
    Primary,
    Secondary,
    Light,
    Dark,
    Custom(String),
}

impl ToastKind {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Custom(name) => name,
        }
    }

    /// Resolve a caller-supplied type name. Missing, blank or multi-word
    /// names fall back to `Success`.
    pub fn from_name_or_default(name: Option<&str>) -> Self {
        match name {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|()| {
                log::warn!("invalid toast type `{raw}`, using success");
                Self::default()
            }),
        }
    }

    /// Full class list of the toast element.
    pub fn class_name(&self) -> String {
        format!("alert alert-{self} alert-dismissible fade show")
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToastKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(());
        }
        Ok(match name.to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "danger" => Self::Danger,
            "warning" => Self::Warning,
            "info" => Self::Info,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Custom(name.to_owned()),
        })
    }
}

/// Where toasts are rendered.
pub trait ToastHost {
    /// Handle to one rendered toast, captured by its removal timer.
    type Toast: 'static;

    /// Append a toast with the given class list and text, after any existing ones.
    ///
    /// # Errors
    ///
    /// Returns an error when the container cannot be resolved or the element
    /// cannot be built.
    fn append_toast(&self, class_name: &str, message: &str) -> Result<Self::Toast, GlueError>;

    fn remove_toast(toast: &Self::Toast);
}

/// Render a toast and schedule its removal after `lifetime_ms`.
///
/// # Errors
///
/// Propagates the host's failure to render; nothing is scheduled then.
pub fn show_toast<H: ToastHost>(
    host: &H,
    scheduler: &impl Scheduler,
    message: &str,
    kind: ToastKind,
    lifetime_ms: u32,
) -> Result<(), GlueError> {
    let toast = host.append_toast(&kind.class_name(), message)?;
    scheduler.schedule(lifetime_ms, Box::new(move || H::remove_toast(&toast)));
    Ok(())
}
