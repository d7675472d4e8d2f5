//! File download via Blob URLs.
//!
//! The browser has no direct "save bytes as file" call. This module
//! triggers downloads by wrapping the payload in a `Blob`, generating
//! an object URL, and programmatically clicking a temporary
//! `<a download>` element.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::JsCast;
use web_sys::{BlobPropertyBag, Document, HtmlElement};

use crate::payload::ImagePayload;

/// Errors that can occur when triggering a file download.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// The environment lacks a required file-save affordance. Not
    /// expected in normal operation.
    #[error("environment lacks a file-save affordance: {0}")]
    Unsupported(&'static str),

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for PersistError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Trigger a browser download of the payload under `filename`.
///
/// The object URL derived from the payload is released on every exit
/// path immediately after the click: the user agent reads the URL
/// synchronously within the save trigger, so trigger-then-release is
/// safe, while releasing before the trigger would invalidate the save.
///
/// # Errors
///
/// Returns [`PersistError::Unsupported`] when no window, document, or
/// body exists, and [`PersistError::Js`] when a browser API call
/// fails.
pub fn save_png(payload: &ImagePayload, filename: &str) -> Result<(), PersistError> {
    let window = web_sys::window().ok_or(PersistError::Unsupported("no global window"))?;
    let document = window
        .document()
        .ok_or(PersistError::Unsupported("no document"))?;
    let body = document
        .body()
        .ok_or(PersistError::Unsupported("no document body"))?;

    let bytes = js_sys::Uint8Array::from(payload.bytes());
    let parts = js_sys::Array::new();
    parts.push(&bytes);

    let opts = BlobPropertyBag::new();
    opts.set_type(payload.mime_type());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let outcome = click_download_anchor(&document, &body, &url, filename);
    let _ = web_sys::Url::revoke_object_url(&url);
    outcome
}

/// Create, click, and remove a temporary `<a download>` element.
fn click_download_anchor(
    document: &Document,
    body: &HtmlElement,
    url: &str,
    filename: &str,
) -> Result<(), PersistError> {
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")?
        .dyn_into()
        .map_err(|element| PersistError::Js(format!("not an anchor element: {element:?}")))?;
    anchor.set_href(url);
    anchor.set_download(filename);

    body.append_child(&anchor)?;
    anchor.click();

    // The download is already initiated; a failure to detach the
    // anchor must not be reported as "download failed".
    let _ = body.remove_child(&anchor);
    Ok(())
}
