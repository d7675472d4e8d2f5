//! Inline editable text.
//!
//! A `contenteditable` element styled to blend into the card until
//! hovered or focused. The edited text is committed through
//! `on_change` when focus leaves the element — not per keystroke, so
//! the caret survives re-renders of the surrounding card.

use dioxus::prelude::*;
use wasm_bindgen::prelude::JsCast;

/// Props for the [`EditableText`] component.
#[derive(Props, Clone, PartialEq)]
pub struct EditableTextProps {
    /// Current text value.
    value: String,
    /// Called with the committed text when editing ends.
    on_change: EventHandler<String>,
    /// Extra classes merged into the element.
    #[props(default)]
    class: String,
}

/// A span of card copy the user can click and retype in place.
#[component]
pub fn EditableText(props: EditableTextProps) -> Element {
    let EditableTextProps {
        value,
        on_change,
        class,
    } = props;
    let mut editing = use_signal(|| false);

    let ring = if editing() {
        "ring-2 ring-blue-400 bg-white/50 rounded cursor-text"
    } else {
        "hover:ring-2 hover:ring-blue-200 hover:rounded"
    };

    rsx! {
        div {
            contenteditable: "true",
            class: "outline-none relative {ring} {class}",
            style: "caret-color: black; min-width: 1ch; min-height: 1em;",
            onfocus: move |_| editing.set(true),
            onblur: move |event| {
                editing.set(false);
                if let Some(text) = committed_text(&event) {
                    on_change.call(text);
                }
            },
            "{value}"
        }
    }
}

/// Read the element's text content out of a blur event.
///
/// Returns `None` outside a browser (the platform event cannot be
/// downcast) or when the event carries no element target.
fn committed_text(event: &Event<FocusData>) -> Option<String> {
    let data = event.data();
    let web_event = data.downcast::<web_sys::FocusEvent>()?;
    let target = web_event.target()?;
    let element = target.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(element.text_content().unwrap_or_default())
}
