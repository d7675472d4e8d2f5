//! Dioxus UI components for promocard.
//!
//! Provides the editable plan card, inline editable text, range
//! slider, section adjustment panel, and the status-aware download
//! button.

mod adjust_panel;
mod download_button;
mod editable_text;
mod plan_card;
mod slider;

pub use adjust_panel::AdjustPanel;
pub use download_button::DownloadButton;
pub use editable_text::EditableText;
pub use plan_card::PlanCard;
pub use slider::Slider;
