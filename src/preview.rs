//! Show a picked image before it is uploaded.
//!
//! The file is read as a data URL; the preview element is looked up only
//! once the read completes, so a target removed in the meantime is skipped.
//! File type is not checked here (see `upload`).

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

use crate::error::GlueError;

/// The `<img>` that displays the preview.
pub trait PreviewTarget {
    fn set_source(&self, url: &str);
    fn show(&self);
}

/// A file input able to read its selection asynchronously.
pub trait DataUrlSource {
    /// Start reading the first selected file. `on_loaded` receives the data
    /// URL. Returns `false` without reading when nothing is selected.
    ///
    /// # Errors
    ///
    /// Returns an error when the read cannot be started.
    fn read_data_url(&self, on_loaded: Box<dyn FnOnce(String)>) -> Result<bool, GlueError>;
}

/// Point `target` at `url` and make it visible. Returns `false` when there is
/// no target.
pub fn apply_preview<T: PreviewTarget>(target: Option<T>, url: &str) -> bool {
    let Some(target) = target else {
        log::debug!("image preview target missing, discarding result");
        return false;
    };
    target.set_source(url);
    target.show();
    true
}

/// Read the selected file and, when done, show it in the element `lookup`
/// resolves. Returns whether a read was started.
///
/// # Errors
///
/// Propagates a failure to start the read.
pub fn preview_image<S, T, F>(source: &S, lookup: F) -> Result<bool, GlueError>
where
    S: DataUrlSource,
    T: PreviewTarget,
    F: FnOnce() -> Option<T> + 'static,
{
    source.read_data_url(Box::new(move |url| {
        apply_preview(lookup(), &url);
    }))
}
