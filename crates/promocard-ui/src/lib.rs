//! promocard-ui: Dioxus component library and export wiring.
//!
//! Provides the editable plan card, the per-section adjustment panel,
//! the status-aware download button, and the [`use_image_export`] hook
//! that drives the export pipeline from a click handler.

pub mod components;
pub mod export;

pub use components::{AdjustPanel, DownloadButton, EditableText, PlanCard, Slider};
pub use export::{ImageExport, POSTER_ELEMENT_ID, POSTER_FILENAME, use_image_export};
pub use promocard_export::ExportStatus;
