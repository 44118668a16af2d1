//! Page helpers for the forum front end, compiled to WebAssembly.
//!
//! Server-rendered forum pages load this crate for small enhancements:
//! flash alerts that close themselves, delete confirmations, image previews
//! and size checks before upload, growing textareas, "5 минут назад"
//! timestamps, smooth in-page scrolling, copy-to-clipboard and toasts.
//!
//! Decision logic lives in plain modules written against small capability
//! traits and is tested natively. The `hydrate` feature adds `dom`, which
//! implements those traits with `web-sys` and exports `ForumPage` to
//! JavaScript.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`alerts`] | Timed dismissal of flash alerts |
//! | [`anchor`] | Fragment-link resolution for smooth scrolling |
//! | [`clipboard`] | Copy fallback and outcome reporting |
//! | [`config`] | Host-supplied [`config::PageConfig`] |
//! | [`dialogs`] | Confirm/alert seam and delete prompt |
//! | [`preview`] | Image preview before upload |
//! | [`schedule`] | One-shot timer seam |
//! | [`textarea`] | Grow-to-fit textareas |
//! | [`time_ago`] | Relative timestamps |
//! | [`toast`] | Toast notifications |
//! | [`upload`] | File size and extension checks |
//! | `dom` | `web-sys` bindings and the JS surface (`hydrate` only) |

pub mod alerts;
pub mod anchor;
pub mod clipboard;
pub mod config;
pub mod consts;
pub mod dialogs;
pub mod error;
pub mod preview;
pub mod schedule;
pub mod textarea;
pub mod time_ago;
pub mod toast;
pub mod upload;

#[cfg(feature = "hydrate")]
pub mod dom;

#[cfg(test)]
#[path = "fakes_test.rs"]
mod fakes;

pub use config::PageConfig;
pub use error::GlueError;
