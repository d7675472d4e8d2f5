//! Shared browser plumbing for the rasterization strategies.
//!
//! Wraps the window/document lookups, the `<foreignObject>` image
//! round-trip, and the canvas-to-PNG encoding both strategies share.
//! Everything here requires a browser environment
//! (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, HtmlImageElement, Window,
};

use crate::payload::Dimensions;
use crate::rasterize::RasterizeError;

/// XHTML namespace required on serialized subtrees embedded in SVG.
pub(crate) const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

/// The global window.
pub(crate) fn window() -> Result<Window, RasterizeError> {
    web_sys::window().ok_or_else(|| RasterizeError::Js("no global window".into()))
}

/// The global document.
pub(crate) fn document() -> Result<Document, RasterizeError> {
    window()?
        .document()
        .ok_or_else(|| RasterizeError::Js("no document".into()))
}

/// Logical (unscaled) pixel dimensions of the render target.
pub(crate) fn logical_dimensions(target: &HtmlElement) -> Result<Dimensions, RasterizeError> {
    let width = u32::try_from(target.offset_width()).unwrap_or(0);
    let height = u32::try_from(target.offset_height()).unwrap_or(0);
    if width == 0 || height == 0 {
        return Err(RasterizeError::Serialization(
            "render target has zero area".into(),
        ));
    }
    Ok(Dimensions { width, height })
}

/// A detached canvas of the given size with its 2D context.
pub(crate) fn canvas_sized(
    document: &Document,
    dimensions: Dimensions,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), RasterizeError> {
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")?
        .dyn_into()
        .map_err(|element| RasterizeError::Js(format!("not a canvas element: {element:?}")))?;
    canvas.set_width(dimensions.width);
    canvas.set_height(dimensions.height);
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| RasterizeError::Js("no 2d canvas context".into()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|context| RasterizeError::Js(format!("unexpected context type: {context:?}")))?;
    Ok((canvas, context))
}

/// Wrap serialized XHTML markup in an SVG `<foreignObject>` data URL.
///
/// The SVG carries the already-scaled dimensions so the browser
/// rasterizes the (CSS-transformed) content at full resolution when
/// the URL is decoded as an image.
pub(crate) fn foreign_object_data_url(markup: &str, dimensions: Dimensions) -> String {
    let svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"><foreignObject x="0" y="0" width="100%" height="100%">{markup}</foreignObject></svg>"#,
        w = dimensions.width,
        h = dimensions.height,
    );
    let encoded = js_sys::encode_uri_component(&svg);
    format!("data:image/svg+xml;charset=utf-8,{}", String::from(encoded))
}

/// Decode `src` into an image element, resolving once it has loaded.
///
/// # Errors
///
/// Returns [`RasterizeError::Serialization`] when the browser rejects
/// the image — for a `<foreignObject>` data URL this is how invalid
/// serialized markup surfaces.
pub(crate) async fn load_image(src: &str) -> Result<HtmlImageElement, RasterizeError> {
    let image = HtmlImageElement::new()?;
    let loaded = js_sys::Promise::new(&mut |resolve, reject| {
        let onload = Closure::once_into_js(move || {
            let _ = resolve.call0(&JsValue::NULL);
        });
        let onerror = Closure::once_into_js(move |event: JsValue| {
            let _ = reject.call1(&JsValue::NULL, &event);
        });
        image.set_onload(Some(onload.unchecked_ref()));
        image.set_onerror(Some(onerror.unchecked_ref()));
    });
    image.set_src(src);
    JsFuture::from(loaded).await.map_err(|_| {
        RasterizeError::Serialization("browser could not decode the serialized subtree".into())
    })?;
    Ok(image)
}

/// Ask the canvas for its PNG encoding.
///
/// Returns `Ok(None)` when the surface completes with an empty
/// payload — the underlying API reports that case through a null
/// callback argument, not an exception.
///
/// # Errors
///
/// Returns [`RasterizeError::Js`] when the encode call itself throws
/// (e.g. a security error from a tainted canvas).
pub(crate) async fn canvas_png_bytes(
    canvas: &HtmlCanvasElement,
) -> Result<Option<Vec<u8>>, RasterizeError> {
    let encoded = js_sys::Promise::new(&mut |resolve, reject| {
        let callback = Closure::once_into_js(move |blob: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &blob);
        });
        if let Err(error) = canvas.to_blob_with_type(callback.unchecked_ref(), crate::PNG_MIME) {
            let _ = reject.call1(&JsValue::NULL, &error);
        }
    });
    let blob = JsFuture::from(encoded).await?;
    if blob.is_null() || blob.is_undefined() {
        return Ok(None);
    }
    let blob: web_sys::Blob = blob
        .dyn_into()
        .map_err(|value| RasterizeError::Js(format!("unexpected encode result: {value:?}")))?;
    let buffer = JsFuture::from(blob.array_buffer()).await?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(Some(bytes))
}
