//! Range slider emitting parsed numeric values.

use dioxus::prelude::*;

/// Props for the [`Slider`] component.
#[derive(Props, Clone, PartialEq)]
pub struct SliderProps {
    /// Current value.
    value: f64,
    /// Lower bound.
    min: f64,
    /// Upper bound.
    max: f64,
    /// Step between positions.
    step: f64,
    /// Called with the clamped value on every input.
    on_change: EventHandler<f64>,
}

/// A styled `<input type="range">`.
///
/// Input that does not parse as a number (possible with exotic input
/// methods) is dropped rather than forwarded.
#[component]
pub fn Slider(props: SliderProps) -> Element {
    rsx! {
        input {
            r#type: "range",
            class: "w-full accent-blue-600 cursor-pointer",
            min: "{props.min}",
            max: "{props.max}",
            step: "{props.step}",
            value: "{props.value}",
            oninput: move |event| {
                if let Ok(value) = event.value().parse::<f64>() {
                    props.on_change.call(value.clamp(props.min, props.max));
                }
            },
        }
    }
}
