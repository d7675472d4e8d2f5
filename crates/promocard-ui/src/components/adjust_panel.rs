//! Per-section size and color adjustment panel.
//!
//! Six size sliders (50–150%) and five hue sliders (0–360°), each hue
//! slider with a gradient strip previewing where the rotation lands.
//! Changes are emitted as whole [`SectionScales`]/[`SectionHues`]
//! values; the panel holds no state of its own.

use dioxus::prelude::*;

use promocard_model::{SectionHues, SectionScales, hue_preview_gradient};

use crate::components::Slider;

/// Props for the [`AdjustPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct AdjustPanelProps {
    /// Current section scales (read-only).
    scales: SectionScales,
    /// Current section hues (read-only).
    hues: SectionHues,
    /// Fired with the updated scales when a size slider moves.
    on_scales_change: EventHandler<SectionScales>,
    /// Fired with the updated hues when a hue slider moves.
    on_hues_change: EventHandler<SectionHues>,
}

/// One labeled size slider row. Slider positions are percentages;
/// scales are stored as multipliers.
fn scale_row(
    label: &'static str,
    scale: f64,
    mut on_change: impl FnMut(f64) + 'static,
) -> Element {
    rsx! {
        div { class: "space-y-1",
            label { class: "text-xs text-gray-600", "{label}" }
            Slider {
                value: scale * 100.0,
                min: 50.0,
                max: 150.0,
                step: 1.0,
                on_change: move |percent: f64| on_change(percent / 100.0),
            }
        }
    }
}

/// One labeled hue slider row with its preview strip.
fn hue_row(label: &'static str, hue: f64, mut on_change: impl FnMut(f64) + 'static) -> Element {
    rsx! {
        div { class: "space-y-1",
            label { class: "text-xs text-gray-600", "{label}" }
            Slider {
                value: hue,
                min: 0.0,
                max: 360.0,
                step: 1.0,
                on_change: move |degrees: f64| on_change(degrees),
            }
            div { style: hue_preview_gradient(hue) }
        }
    }
}

/// The adjustment panel under the poster.
#[component]
pub fn AdjustPanel(props: AdjustPanelProps) -> Element {
    let scales = props.scales;
    let hues = props.hues;
    let on_scales = props.on_scales_change;
    let on_hues = props.on_hues_change;

    rsx! {
        div { class: "w-full max-w-[600px] space-y-6 bg-white/80 backdrop-blur-sm p-6 rounded-lg shadow-lg",
            div { class: "space-y-2",
                h3 { class: "text-sm font-medium text-gray-700", "Size Adjustments" }
                div { class: "space-y-4",
                    {scale_row("Header Size", scales.header, move |v| {
                        let mut updated = scales;
                        updated.header = v;
                        on_scales.call(updated);
                    })}
                    {scale_row("Plan Name Size", scales.plan_name, move |v| {
                        let mut updated = scales;
                        updated.plan_name = v;
                        on_scales.call(updated);
                    })}
                    {scale_row("Features Size", scales.features, move |v| {
                        let mut updated = scales;
                        updated.features = v;
                        on_scales.call(updated);
                    })}
                    {scale_row("Promotion Size", scales.promo, move |v| {
                        let mut updated = scales;
                        updated.promo = v;
                        on_scales.call(updated);
                    })}
                    {scale_row("Price Section Size", scales.footer, move |v| {
                        let mut updated = scales;
                        updated.footer = v;
                        on_scales.call(updated);
                    })}
                    {scale_row("Logo Size", scales.logo, move |v| {
                        let mut updated = scales;
                        updated.logo = v;
                        on_scales.call(updated);
                    })}
                }
            }

            div { class: "space-y-2",
                h3 { class: "text-sm font-medium text-gray-700", "Color Adjustments" }
                div { class: "space-y-4",
                    {hue_row("Header Colors", hues.header, move |v| {
                        let mut updated = hues;
                        updated.header = v;
                        on_hues.call(updated);
                    })}
                    {hue_row("Plan Name Colors", hues.plan_name, move |v| {
                        let mut updated = hues;
                        updated.plan_name = v;
                        on_hues.call(updated);
                    })}
                    {hue_row("Features Colors", hues.features, move |v| {
                        let mut updated = hues;
                        updated.features = v;
                        on_hues.call(updated);
                    })}
                    {hue_row("Promotion Colors", hues.promo, move |v| {
                        let mut updated = hues;
                        updated.promo = v;
                        on_hues.call(updated);
                    })}
                    {hue_row("Price Section Colors", hues.footer, move |v| {
                        let mut updated = hues;
                        updated.footer = v;
                        on_hues.call(updated);
                    })}
                }
            }
        }
    }
}
