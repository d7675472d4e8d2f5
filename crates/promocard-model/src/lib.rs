//! promocard-model: Plan card data model (sans-IO)
//!
//! Pure data types describing the promotional card — the editable plan
//! details, the number-tier presentation table, and the per-section
//! size/hue adjustments — plus the inline-style strings computed from
//! them. No browser dependencies; everything here is testable on any
//! target.

pub mod adjust;
pub mod plan;

pub use adjust::{SectionHues, SectionScales, hue_preview_gradient, hue_style, scale_style};
pub use plan::{NumberType, PlanDetails};
