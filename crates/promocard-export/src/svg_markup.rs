//! Primary rasterization strategy: SVG-markup serialization.
//!
//! Clones the live subtree, inlines every element's computed style
//! (serialized markup loses access to the page's stylesheets),
//! serializes the clone into an SVG `<foreignObject>` document, and
//! paints the decoded document onto a canvas over an opaque white
//! fill. Fast and faithful to nested styles, gradients, and blur
//! filters, but brittle: any serialization fault fails the whole
//! strategy and the coordinator moves on to the canvas surface.

use std::fmt::Write;

use wasm_bindgen::prelude::JsCast;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, HtmlInputElement, Window, XmlSerializer};

use crate::dom;
use crate::payload::ImagePayload;
use crate::rasterize::{RasterConfig, RasterizeError, Rasterizer};

/// Serializes the subtree to SVG markup and paints it once.
#[derive(Debug, Clone)]
pub struct SvgMarkupRasterizer {
    config: RasterConfig,
}

impl SvgMarkupRasterizer {
    /// Strategy with an explicit configuration.
    #[must_use]
    pub const fn new(config: RasterConfig) -> Self {
        Self { config }
    }
}

impl Default for SvgMarkupRasterizer {
    fn default() -> Self {
        Self::new(RasterConfig::PRIMARY)
    }
}

impl Rasterizer for SvgMarkupRasterizer {
    type Target = HtmlElement;

    #[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
    async fn rasterize(&self, target: &HtmlElement) -> Result<ImagePayload, RasterizeError> {
        if !target.is_connected() {
            return Err(RasterizeError::Detached);
        }
        let window = dom::window()?;
        let document = dom::document()?;
        let logical = dom::logical_dimensions(target)?;
        let scaled = self.config.scaled(logical);

        // Unfocused text inputs are presentation affordances with no
        // committed text outside editing mode; they are dropped from
        // the serialized clone.
        let active = document.active_element();
        let clone = clone_with_inline_styles(&window, target, active.as_ref())?
            .ok_or_else(|| RasterizeError::Serialization("render target was filtered out".into()))?;

        // Scaling via CSS transform (not canvas scaling) so vector
        // content is rasterized at the super-sampled resolution.
        append_style(
            &clone,
            &format!(
                "transform: scale({factor}); transform-origin: top left;",
                factor = self.config.scale_factor
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
            .ok_or_else(|| RasterizeError::Serialization("canvas produced no payload".into()))?;
        Ok(ImagePayload::new(bytes, scaled))
    }
}

/// Deep-copy `source`, inlining each element's computed style onto the
/// copy.
///
/// Returns `Ok(None)` for subtrees that are filtered out entirely —
/// currently only text inputs that do not hold input focus.
fn clone_with_inline_styles(
    window: &Window,
    source: &Element,
    active: Option<&Element>,
) -> Result<Option<Element>, RasterizeError> {
    if source.dyn_ref::<HtmlInputElement>().is_some() {
        let focused = active.is_some_and(|a| a.is_same_node(Some(source.as_ref())));
        if !focused {
            return Ok(None);
        }
    }

    let clone: Element = source
        .clone_node()?
        .dyn_into()
        .map_err(|node| RasterizeError::Js(format!("clone is not an element: {node:?}")))?;

    if let Some(style) = window.get_computed_style(source)? {
        let css = inline_css_text(&style)?;
        if !css.is_empty() {
            clone.set_attribute("style", &css)?;
        }
    }

    let children = source.child_nodes();
    for index in 0..children.length() {
        let Some(child) = children.item(index) else {
            continue;
        };
        if let Some(child_element) = child.dyn_ref::<Element>() {
            if let Some(child_clone) = clone_with_inline_styles(window, child_element, active)? {
                clone.append_child(&child_clone)?;
            }
        } else {
            // Text and other non-element nodes copy verbatim.
            clone.append_child(&child.clone_node_with_deep(true)?)?;
        }
    }

    Ok(Some(clone))
}

/// Flatten a computed style declaration into inline CSS text.
fn inline_css_text(style: &CssStyleDeclaration) -> Result<String, RasterizeError> {
    let mut css = String::new();
    for index in 0..style.length() {
        let name = style.item(index);
        if name.is_empty() {
            continue;
        }
        let value = style.get_property_value(&name)?;
        let priority = style.get_property_priority(&name);
        let _ = write!(css, "{name}: {value}");
        if !priority.is_empty() {
            let _ = write!(css, " !{priority}");
        }
        css.push_str("; ");
    }
    Ok(css)
}

/// Append declarations to an element's `style` attribute, after any
/// inlined computed style so they take precedence.
fn append_style(element: &Element, extra: &str) -> Result<(), RasterizeError> {
    let existing = element.get_attribute("style").unwrap_or_default();
    let combined = if existing.is_empty() {
        extra.to_owned()
    } else {
        format!("{existing} {extra}")
    };
    element.set_attribute("style", &combined)?;
    Ok(())
}
