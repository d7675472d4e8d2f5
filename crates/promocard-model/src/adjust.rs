//! Per-section size and color adjustments.
//!
//! The card is tuned section-by-section: each section gets a size
//! multiplier and a hue rotation, applied as inline `transform` and
//! `filter` styles. This module owns the adjustment state and the
//! style-string computation; the UI only renders what it is given.

use serde::{Deserialize, Serialize};

/// Smallest allowed section scale (50%).
pub const MIN_SCALE: f64 = 0.5;
/// Largest allowed section scale (150%).
pub const MAX_SCALE: f64 = 1.5;
/// Full hue circle in degrees.
pub const MAX_HUE: f64 = 360.0;

/// Size multiplier per card section.
///
/// Values are clamped to [`MIN_SCALE`]..=[`MAX_SCALE`] when turned
/// into styles, so out-of-range slider input cannot distort the card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionScales {
    /// Header badges (tier badge + phone number).
    pub header: f64,
    /// Plan name headline.
    pub plan_name: f64,
    /// Feature tile grid.
    pub features: f64,
    /// Promotion panel.
    pub promo: f64,
    /// Price footer.
    pub footer: f64,
    /// Operator logo.
    pub logo: f64,
}

impl Default for SectionScales {
    fn default() -> Self {
        Self {
            header: 1.0,
            plan_name: 1.0,
            features: 1.0,
            promo: 1.0,
            footer: 1.0,
            logo: 1.0,
        }
    }
}

/// Hue rotation in degrees per card section.
///
/// The logo is deliberately absent: rotating a brand mark's colors is
/// never wanted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionHues {
    /// Header glow and border gradients.
    pub header: f64,
    /// Plan name headline gradient.
    pub plan_name: f64,
    /// Feature tile gradients.
    pub features: f64,
    /// Promotion panel background.
    pub promo: f64,
    /// Price footer background.
    pub footer: f64,
}

/// Inline style scaling a section about its center.
///
/// Center origin keeps a resized section visually anchored in its grid
/// cell instead of growing toward the bottom right.
#[must_use]
pub fn scale_style(scale: f64) -> String {
    let scale = scale.clamp(MIN_SCALE, MAX_SCALE);
    format!("transform: scale({scale}); transform-origin: center;")
}

/// Inline style rotating a section's hues.
#[must_use]
pub fn hue_style(degrees: f64) -> String {
    let degrees = clamp_hue(degrees);
    format!("filter: hue-rotate({degrees}deg);")
}

/// Gradient strip previewing the effect of a hue rotation.
///
/// Four fully saturated stops spaced 60° apart, so sliding the hue
/// control visibly walks the strip around the color wheel.
#[must_use]
pub fn hue_preview_gradient(degrees: f64) -> String {
    let h = clamp_hue(degrees);
    format!(
        "background: linear-gradient(to right, \
         hsl({h}, 100%, 50%) 0%, \
         hsl({}, 100%, 50%) 33%, \
         hsl({}, 100%, 50%) 66%, \
         hsl({}, 100%, 50%) 100%); \
         height: 4px; border-radius: 2px; margin-top: 4px;",
        (h + 60.0) % MAX_HUE,
        (h + 120.0) % MAX_HUE,
        (h + 180.0) % MAX_HUE,
    )
}

/// Clamp a hue to a single turn of the color wheel.
fn clamp_hue(degrees: f64) -> f64 {
    if degrees.is_nan() {
        return 0.0;
    }
    degrees.clamp(0.0, MAX_HUE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scales_are_identity() {
        let scales = SectionScales::default();
        assert!((scales.header - 1.0).abs() < f64::EPSILON);
        assert!((scales.logo - 1.0).abs() < f64::EPSILON);
        assert_eq!(scale_style(scales.features), "transform: scale(1); transform-origin: center;");
    }

    #[test]
    fn default_hues_are_zero() {
        let hues = SectionHues::default();
        assert!(hues.header.abs() < f64::EPSILON);
        assert_eq!(hue_style(hues.promo), "filter: hue-rotate(0deg);");
    }

    #[test]
    fn scale_style_clamps_out_of_range_input() {
        assert_eq!(scale_style(0.1), "transform: scale(0.5); transform-origin: center;");
        assert_eq!(scale_style(9.0), "transform: scale(1.5); transform-origin: center;");
    }

    #[test]
    fn hue_style_clamps_and_formats_degrees() {
        assert_eq!(hue_style(180.0), "filter: hue-rotate(180deg);");
        assert_eq!(hue_style(-45.0), "filter: hue-rotate(0deg);");
        assert_eq!(hue_style(720.0), "filter: hue-rotate(360deg);");
        assert_eq!(hue_style(f64::NAN), "filter: hue-rotate(0deg);");
    }

    #[test]
    fn hue_preview_walks_the_color_wheel() {
        let strip = hue_preview_gradient(300.0);
        // 300° + 60°/120°/180° wrap to 0°/60°/120°.
        assert!(strip.contains("hsl(300, 100%, 50%) 0%"), "strip: {strip}");
        assert!(strip.contains("hsl(0, 100%, 50%) 33%"), "strip: {strip}");
        assert!(strip.contains("hsl(60, 100%, 50%) 66%"), "strip: {strip}");
        assert!(strip.contains("hsl(120, 100%, 50%) 100%"), "strip: {strip}");
    }
}
