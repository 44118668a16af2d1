//! Error type shared by the browser bindings and config parsing.

#[derive(Debug, thiserror::Error)]
pub enum GlueError {
    #[error("browser window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("document has no body")]
    NoBody,
    #[error("element `{0}` has an unexpected type")]
    WrongElement(String),
    #[error("dom call failed: {0}")]
    Dom(String),
    #[error("invalid page config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid page config: {0}")]
    InvalidSetting(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for GlueError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
impl From<GlueError> for wasm_bindgen::JsValue {
    fn from(err: GlueError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
