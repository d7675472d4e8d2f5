//! promocard-export: Poster rasterization and download pipeline.
//!
//! Turns a live, styled DOM subtree into a PNG the user can save.
//! Two rasterization strategies sit behind one [`Rasterizer`]
//! capability: the fast SVG-markup serializer ([`SvgMarkupRasterizer`])
//! and the slower but more forgiving canvas surface renderer
//! ([`CanvasSurfaceRasterizer`]). [`rasterize_with_fallback`] tries
//! them in that fixed order. [`save_png`] hands the payload to the
//! browser as a file download, and [`StatusMachine`] owns the
//! idle/generating/downloading/error lifecycle the UI observes.
//!
//! The strategy implementations and the persister require a browser
//! environment (`wasm32-unknown-unknown` target); the coordinator,
//! payload types, and status machine are target-independent and
//! covered by native tests.

pub mod canvas_surface;
mod dom;
pub mod download;
pub mod payload;
pub mod rasterize;
pub mod status;
pub mod svg_markup;

pub use canvas_surface::CanvasSurfaceRasterizer;
pub use download::{PersistError, save_png};
pub use payload::{Dimensions, ImagePayload, PNG_MIME};
pub use rasterize::{
    ExportError, RasterConfig, RasterizeError, Rasterizer, rasterize_with_fallback,
};
pub use status::{ERROR_RECOVERY_MS, ExportStatus, StatusMachine};
pub use svg_markup::SvgMarkupRasterizer;
