//! Rasterization capability and the fixed fallback sequence.
//!
//! Exactly two strategies exist and their order is fixed by the
//! cost/robustness trade-off: the SVG-markup serializer is fast and
//! high-fidelity but brittle against some gradient/filter
//! combinations; the canvas surface renderer is slower and coarser for
//! effects but handles arbitrary subtree shapes. There is no plugin
//! registry and no retry loop — primary, then fallback, then give up.

use wasm_bindgen::JsValue;

use crate::download::PersistError;
use crate::payload::{Dimensions, ImagePayload};

/// Super-sampling factor and background fill for one strategy.
///
/// The fallback compensates for its lower visual fidelity with a
/// higher factor; both fill opaque white behind the subtree so the
/// exported file never carries transparency artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterConfig {
    /// Multiplier applied to the target's logical dimensions.
    pub scale_factor: u32,
    /// CSS color painted behind the subtree.
    pub background: &'static str,
}

impl RasterConfig {
    /// Settings for the SVG-markup strategy.
    pub const PRIMARY: Self = Self {
        scale_factor: 3,
        background: "#fff",
    };

    /// Settings for the canvas surface strategy.
    pub const FALLBACK: Self = Self {
        scale_factor: 4,
        background: "#ffffff",
    };

    /// Output dimensions for a target of the given logical size.
    #[must_use]
    pub const fn scaled(self, logical: Dimensions) -> Dimensions {
        Dimensions {
            width: logical.width.saturating_mul(self.scale_factor),
            height: logical.height.saturating_mul(self.scale_factor),
        }
    }
}

/// A rasterization strategy could not produce pixel data.
#[derive(Debug, thiserror::Error)]
pub enum RasterizeError {
    /// The subtree could not be serialized or painted (unsupported
    /// style feature, image decode failure, missing 2D context…).
    #[error("subtree serialization failed: {0}")]
    Serialization(String),

    /// The render target is no longer attached to a document.
    #[error("render target is not attached to a document")]
    Detached,

    /// The pixel surface reported completion but produced no encoded
    /// payload. Distinct from a thrown fault: the underlying API
    /// signals this case through an empty callback.
    #[error("pixel surface produced no encoded payload")]
    Encoding,

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for RasterizeError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// The export could not be completed.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Both rasterization strategies failed.
    #[error("both rasterization strategies failed; primary: {primary}; fallback: {fallback}")]
    RasterizeFailed {
        /// What the SVG-markup strategy reported.
        primary: RasterizeError,
        /// What the canvas surface strategy reported.
        fallback: RasterizeError,
    },

    /// Rasterization succeeded but the save trigger failed.
    #[error("failed to persist exported image: {0}")]
    Persist(#[from] PersistError),
}

/// Capability of turning a live render target into an encoded image.
#[allow(async_fn_in_trait)] // WASM is single-threaded; Send bounds are not needed
pub trait Rasterizer {
    /// The subtree handle this strategy renders. A type parameter so
    /// the coordinator's sequencing is testable without a browser.
    type Target: ?Sized;

    /// Produce an encoded payload from `target`.
    ///
    /// Must not leave any observable mutation on `target` — strategies
    /// that rewrite nodes do so on a disposable clone.
    ///
    /// # Errors
    ///
    /// Returns a [`RasterizeError`] describing the serialization or
    /// encoding fault.
    async fn rasterize(&self, target: &Self::Target) -> Result<ImagePayload, RasterizeError>;
}

/// Try the primary strategy, falling through to the fallback on any
/// failure.
///
/// The fallback runs at most once and its outcome is propagated
/// unchanged; "primary failed, fallback also failed" is terminal.
/// Fallback activation is logged at warning level.
///
/// # Errors
///
/// Returns [`ExportError::RasterizeFailed`] carrying both causes when
/// the strategies both fail.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn rasterize_with_fallback<T, P, F>(
    target: &T,
    primary: &P,
    fallback: &F,
) -> Result<ImagePayload, ExportError>
where
    T: ?Sized,
    P: Rasterizer<Target = T>,
    F: Rasterizer<Target = T>,
{
    match primary.rasterize(target).await {
        Ok(payload) => Ok(payload),
        Err(primary_err) => {
            tracing::warn!("primary rasterizer failed, re-rendering on canvas surface: {primary_err}");
            match fallback.rasterize(target).await {
                Ok(payload) => Ok(payload),
                Err(fallback_err) => Err(ExportError::RasterizeFailed {
                    primary: primary_err,
                    fallback: fallback_err,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    /// Strategy double that counts invocations and either succeeds
    /// with a payload scaled by `factor` or fails with a scripted
    /// error.
    struct Scripted {
        factor: u32,
        succeed: bool,
        calls: Cell<usize>,
    }

    impl Scripted {
        fn ok(factor: u32) -> Self {
            Self {
                factor,
                succeed: true,
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                factor: 0,
                succeed: false,
                calls: Cell::new(0),
            }
        }
    }

    impl Rasterizer for Scripted {
        type Target = Dimensions;

        async fn rasterize(&self, target: &Dimensions) -> Result<ImagePayload, RasterizeError> {
            self.calls.set(self.calls.get() + 1);
            if self.succeed {
                let dims = Dimensions {
                    width: target.width * self.factor,
                    height: target.height * self.factor,
                };
                Ok(ImagePayload::new(vec![0u8; 8], dims))
            } else {
                Err(RasterizeError::Serialization("scripted failure".into()))
            }
        }
    }

    const LOGICAL: Dimensions = Dimensions {
        width: 380,
        height: 600,
    };

    #[test]
    fn primary_success_never_invokes_fallback() {
        let primary = Scripted::ok(3);
        let fallback = Scripted::ok(4);
        let result = pollster::block_on(rasterize_with_fallback(&LOGICAL, &primary, &fallback));
        let Ok(payload) = result else {
            unreachable!("primary succeeds");
        };
        assert!(!payload.is_empty());
        assert_eq!(payload.dimensions().width, 1140);
        assert_eq!(payload.dimensions().height, 1800);
        assert_eq!(primary.calls.get(), 1);
        assert_eq!(fallback.calls.get(), 0);
    }

    #[test]
    fn primary_failure_invokes_fallback_exactly_once() {
        let primary = Scripted::failing();
        let fallback = Scripted::ok(4);
        let result = pollster::block_on(rasterize_with_fallback(&LOGICAL, &primary, &fallback));
        let Ok(payload) = result else {
            unreachable!("fallback succeeds");
        };
        assert_eq!(payload.dimensions().width, 1520);
        assert_eq!(payload.dimensions().height, 2400);
        assert_eq!(primary.calls.get(), 1);
        assert_eq!(fallback.calls.get(), 1);
    }

    #[test]
    fn both_failing_is_terminal_with_no_retry() {
        let primary = Scripted::failing();
        let fallback = Scripted::failing();
        let result = pollster::block_on(rasterize_with_fallback(&LOGICAL, &primary, &fallback));
        match result {
            Err(ExportError::RasterizeFailed { primary: p, fallback: f }) => {
                assert!(matches!(p, RasterizeError::Serialization(_)));
                assert!(matches!(f, RasterizeError::Serialization(_)));
            }
            _ => unreachable!("both strategies fail"),
        }
        assert_eq!(primary.calls.get(), 1);
        assert_eq!(fallback.calls.get(), 1);
    }

    #[test]
    fn configs_scale_logical_dimensions() {
        let primary = RasterConfig::PRIMARY.scaled(LOGICAL);
        assert_eq!((primary.width, primary.height), (1140, 1800));
        let fallback = RasterConfig::FALLBACK.scaled(LOGICAL);
        assert_eq!((fallback.width, fallback.height), (1520, 2400));
    }

    #[test]
    fn error_displays_name_their_cause() {
        let err = RasterizeError::Encoding;
        assert_eq!(err.to_string(), "pixel surface produced no encoded payload");
        let err = ExportError::RasterizeFailed {
            primary: RasterizeError::Detached,
            fallback: RasterizeError::Encoding,
        };
        let text = err.to_string();
        assert!(text.contains("both rasterization strategies failed"), "{text}");
        assert!(text.contains("not attached"), "{text}");
    }
}
