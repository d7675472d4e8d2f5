//! Fallback rasterization strategy: offscreen canvas surface.
//!
//! Re-renders a deep clone of the subtree at a higher super-sampling
//! factor. Two compatibility passes run on the clone before painting
//! (the live subtree is never touched):
//!
//! 1. **Node substitution** — `<input>` elements become `<span>`s
//!    carrying their current value and class, because the surface
//!    cannot paint native form-control chrome faithfully.
//! 2. **Style normalization** — a `<style>` block pins concrete values
//!    for the enumerated design-system utility classes (gradient
//!    directions and stops, blur radii, translucency, shadow) whose
//!    computed values this path resolves incorrectly or not at all.
//!    A deliberate, enumerated shim, not general CSS support.
//!
//! This path only runs after the primary strategy has failed, so it
//! trades cost for robustness.

use wasm_bindgen::prelude::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, XmlSerializer};

use crate::dom;
use crate::payload::ImagePayload;
use crate::rasterize::{RasterConfig, RasterizeError, Rasterizer};

/// Pinned values for the utility classes the surface renderer cannot
/// resolve on its own.
const NORMALIZED_UTILITY_CSS: &str = r"
* {
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}
.bg-gradient-to-r { background: linear-gradient(to right, var(--tw-gradient-stops)) !important; }
.bg-gradient-to-br { background: linear-gradient(to bottom right, var(--tw-gradient-stops)) !important; }
.bg-gradient-to-b { background: linear-gradient(to bottom, var(--tw-gradient-stops)) !important; }
.from-red-500 { --tw-gradient-from: #ef4444 !important; }
.to-amber-500 { --tw-gradient-to: #f59e0b !important; }
.from-blue-500 { --tw-gradient-from: #3b82f6 !important; }
.to-purple-500 { --tw-gradient-to: #a855f7 !important; }
.from-emerald-50 { --tw-gradient-from: #ecfdf5 !important; }
.to-blue-50 { --tw-gradient-to: #eff6ff !important; }
.blur-2xl { filter: blur(40px) !important; }
.backdrop-blur-xl { backdrop-filter: blur(24px) !important; }
.backdrop-blur-sm { backdrop-filter: blur(4px) !important; }
.bg-white\/95 { background-color: rgb(255 255 255 / 0.95) !important; }
.shadow-xl { box-shadow: 0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1) !important; }
";

/// Re-renders a normalized clone of the subtree on a detached canvas.
#[derive(Debug, Clone)]
pub struct CanvasSurfaceRasterizer {
    config: RasterConfig,
}

impl CanvasSurfaceRasterizer {
    /// Strategy with an explicit configuration.
    #[must_use]
    pub const fn new(config: RasterConfig) -> Self {
        Self { config }
    }
}

impl Default for CanvasSurfaceRasterizer {
    fn default() -> Self {
        Self::new(RasterConfig::FALLBACK)
    }
}

impl Rasterizer for CanvasSurfaceRasterizer {
    type Target = HtmlElement;

    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn rasterize(&self, target: &HtmlElement) -> Result<ImagePayload, RasterizeError> {
        if !target.is_connected() {
            return Err(RasterizeError::Detached);
        }
        let document = dom::document()?;
        let logical = dom::logical_dimensions(target)?;
        let scaled = self.config.scaled(logical);

        // All mutation happens on this clone; the live subtree stays
        // untouched for the duration of the export.
        let clone: Element = target
            .clone_node_with_deep(true)?
            .dyn_into()
            .map_err(|node| RasterizeError::Js(format!("clone is not an element: {node:?}")))?;
        substitute_text_inputs(&document, &clone)?;
        inject_normalization_styles(&document, &clone)?;

        clone.set_attribute(
            "style",
            &format!(
                "transform: scale({factor}); transform-origin: top left; \
                 width: {width}px; height: {height}px;",
                factor = self.config.scale_factor,
                width = logical.width,
                height = logical.height,
            ),
        )?;
        clone.set_attribute("xmlns", dom::XHTML_NS)?;

        let markup = XmlSerializer::new()?.serialize_to_string(&clone)?;
        let url = dom::foreign_object_data_url(&markup, scaled);
        let image = dom::load_image(&url).await?;

        let (canvas, context) = dom::canvas_sized(&document, scaled)?;
        context.set_fill_style_str(self.config.background);
        context.fill_rect(0.0, 0.0, f64::from(scaled.width), f64::from(scaled.height));
        context.draw_image_with_html_image_element(&image, 0.0, 0.0)?;

        let bytes = dom::canvas_png_bytes(&canvas)
            .await?
            .ok_or(RasterizeError::Encoding)?;
        Ok(ImagePayload::new(bytes, scaled))
    }
}

/// Replace every `<input>` in the clone with a `<span>` carrying its
/// current value and class.
fn substitute_text_inputs(document: &Document, root: &Element) -> Result<(), RasterizeError> {
    let inputs = root.query_selector_all("input")?;
    for index in 0..inputs.length() {
        let Some(node) = inputs.item(index) else {
            continue;
        };
        let Ok(input) = node.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let Some(parent) = input.parent_element() else {
            continue;
        };
        let span = document.create_element("span")?;
        span.set_text_content(Some(&input.value()));
        span.set_class_name(&input.class_name());
        parent.replace_child(&span, &input)?;
    }
    Ok(())
}

/// Prepend the normalization `<style>` block to the clone so inline
/// styles written later still win.
fn inject_normalization_styles(document: &Document, root: &Element) -> Result<(), RasterizeError> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(NORMALIZED_UTILITY_CSS));
    match root.first_child() {
        Some(first) => {
            root.insert_before(&style, Some(&first))?;
        }
        None => {
            root.append_child(&style)?;
        }
    }
    Ok(())
}
