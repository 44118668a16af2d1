//! Form controls: file inputs, auto-resizing textareas, preview images.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{File, FileReader, HtmlElement, HtmlInputElement, ProgressEvent};

use crate::error::GlueError;
use crate::preview::{DataUrlSource, PreviewTarget};
use crate::textarea::ResizableField;
use crate::upload::FileField;

/// A `<input type="file">` seen through the upload and preview traits.
pub struct FileInput<'a>(pub &'a HtmlInputElement);

impl FileInput<'_> {
    fn first_file(&self) -> Option<File> {
        self.0.files().and_then(|list| list.get(0))
    }
}

impl FileField for FileInput<'_> {
    fn selected_size(&self) -> Option<f64> {
        self.first_file().map(|file| file.size())
    }

    fn selected_name(&self) -> Option<String> {
        self.first_file().map(|file| file.name())
    }

    fn clear(&self) {
        self.0.set_value("");
    }
}

impl DataUrlSource for FileInput<'_> {
    fn read_data_url(&self, on_loaded: Box<dyn FnOnce(String)>) -> Result<bool, GlueError> {
        let Some(file) = self.first_file() else {
            return Ok(false);
        };
        let reader = FileReader::new()?;
        let reader_for_cb = reader.clone();
        let on_load = Closure::once_into_js(move |_event: ProgressEvent| match reader_for_cb.result() {
            Ok(value) => match value.as_string() {
                Some(url) => on_loaded(url),
                None => log::warn!("file reader produced a non-string result"),
            },
            Err(err) => log::warn!("file reader failed: {err:?}"),
        });
        reader.set_onload(Some(on_load.unchecked_ref()));
        reader.read_as_data_url(&file)?;
        Ok(true)
    }
}

impl PreviewTarget for HtmlElement {
    fn set_source(&self, url: &str) {
        if let Err(err) = self.set_attribute("src", url) {
            log::warn!("could not set preview source: {err:?}");
        }
    }

    fn show(&self) {
        if let Err(err) = self.style().set_property("display", "block") {
            log::warn!("could not show preview: {err:?}");
        }
    }
}

impl ResizableField for HtmlElement {
    fn set_height(&self, value: &str) {
        if let Err(err) = self.style().set_property("height", value) {
            log::warn!("could not resize textarea: {err:?}");
        }
    }

    fn scroll_height(&self) -> i32 {
        // Element::scroll_height, not this trait method.
        web_sys::Element::scroll_height(self)
    }
}
