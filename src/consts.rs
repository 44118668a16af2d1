//! Shared constants: delays, selectors, element ids and user-facing text.

#[cfg(test)]
#[path = "consts_test.rs"]
mod consts_test;

// ── Timing ──────────────────────────────────────────────────────

/// Delay before a rendered `.alert` closes itself, in milliseconds.
pub const ALERT_DISMISS_MS: u32 = 5000;

/// Lifetime of a toast before it is removed, in milliseconds.
pub const TOAST_LIFETIME_MS: u32 = 3000;

// ── Uploads ─────────────────────────────────────────────────────

/// Upload size limit in megabytes; mirrors the server's `MAX_CONTENT_LENGTH`.
pub const DEFAULT_MAX_UPLOAD_MB: f64 = 16.0;

/// Extensions the server accepts for uploaded pictures.
pub const DEFAULT_ALLOWED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

pub const BYTES_PER_KIB: f64 = 1024.0;

// ── Selectors and ids ───────────────────────────────────────────

pub const DISMISSIBLE_ALERT_SELECTOR: &str = ".alert:not(.alert-permanent)";
pub const AUTO_RESIZE_SELECTOR: &str = "textarea.auto-resize";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Inline styles applied to a freshly created toast container.
pub const TOAST_CONTAINER_STYLE: [(&str, &str); 4] =
    [("position", "fixed"), ("top", "20px"), ("right", "20px"), ("z-index", "9999")];

/// Inline styles that keep the legacy copy field out of sight.
pub const HIDDEN_COPY_FIELD_STYLE: [(&str, &str); 2] = [("position", "fixed"), ("opacity", "0")];

// ── Relative time ───────────────────────────────────────────────

pub const SECONDS_PER_YEAR: i64 = 31_536_000;
pub const SECONDS_PER_MONTH: i64 = 2_592_000;
pub const SECONDS_PER_DAY: i64 = 86_400;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_MINUTE: i64 = 60;

// ── Messages ────────────────────────────────────────────────────

pub const DEFAULT_DELETE_PROMPT: &str = "Вы уверены, что хотите удалить это?";
pub const COPIED_MESSAGE: &str = "Скопировано в буфер обмена";
pub const COPY_FAILED_MESSAGE: &str = "Ошибка копирования";
pub const AGO_SUFFIX: &str = "назад";
