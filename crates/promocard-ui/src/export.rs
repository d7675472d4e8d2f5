//! Export pipeline wiring for Dioxus.
//!
//! [`use_image_export`] owns the export [`StatusMachine`] in a signal
//! and hands the component a [`ImageExport`] handle: read
//! [`status`](ImageExport::status) for rendering, call
//! [`trigger`](ImageExport::trigger) from a click handler. One export
//! runs at a time; triggers during an in-flight export are dropped by
//! the machine's guard, and failures clear themselves after
//! [`ERROR_RECOVERY_MS`](promocard_export::ERROR_RECOVERY_MS).

use dioxus::prelude::*;
use wasm_bindgen::prelude::JsCast;

use promocard_export::{
    CanvasSurfaceRasterizer, ERROR_RECOVERY_MS, ExportError, ExportStatus, StatusMachine,
    SvgMarkupRasterizer, rasterize_with_fallback, save_png,
};

/// DOM id of the poster wrapper element the pipeline rasterizes.
pub const POSTER_ELEMENT_ID: &str = "plan-poster";

/// Filename offered by the browser's save action.
pub const POSTER_FILENAME: &str = "plan-poster.png";

/// Handle returned by [`use_image_export`].
#[derive(Clone, Copy)]
pub struct ImageExport {
    machine: Signal<StatusMachine>,
    /// Bumped on every accepted trigger so a stale error-recovery
    /// timer can tell it has been superseded.
    epoch: Signal<u64>,
}

/// Hook owning the export status machine for one poster.
pub fn use_image_export() -> ImageExport {
    let machine = use_signal(StatusMachine::new);
    let epoch = use_signal(|| 0u64);
    ImageExport { machine, epoch }
}

impl ImageExport {
    /// Current export status, for button/label rendering.
    #[must_use]
    pub fn status(&self) -> ExportStatus {
        self.machine.read().status()
    }

    /// Start an export of the element with the given id.
    ///
    /// A quiet no-op when the element is not mounted or an export is
    /// already in flight. Once accepted, the export runs to completion
    /// or failure; there is no cancellation.
    pub fn trigger(&mut self, element_id: &str, filename: &'static str) {
        let Some(target) = resolve_target(element_id) else {
            return;
        };
        if !self.machine.write().try_begin() {
            return;
        }
        let mut epoch = self.epoch;
        epoch += 1;

        let mut machine = self.machine;
        spawn(async move {
            if let Err(error) = export_poster(&target, filename, &mut machine).await {
                tracing::error!("poster export failed: {error}");
                machine.write().fail();
                let scheduled = *epoch.peek();
                gloo_timers::future::TimeoutFuture::new(ERROR_RECOVERY_MS).await;
                // A newer trigger supersedes the pending recovery; the
                // machine's own guard catches the remaining races.
                if *epoch.peek() == scheduled {
                    machine.write().recover();
                }
            }
        });
    }
}

/// Rasterize the target and hand the payload to the browser's save
/// action, advancing the status machine between the phases.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
async fn export_poster(
    target: &web_sys::HtmlElement,
    filename: &str,
    machine: &mut Signal<StatusMachine>,
) -> Result<(), ExportError> {
    let payload = rasterize_with_fallback(
        target,
        &SvgMarkupRasterizer::default(),
        &CanvasSurfaceRasterizer::default(),
    )
    .await?;
    machine.write().begin_download();
    save_png(&payload, filename)?;
    machine.write().complete();
    Ok(())
}

/// Look up the live poster element by id.
fn resolve_target(element_id: &str) -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(element_id)?;
    element.dyn_into::<web_sys::HtmlElement>().ok()
}
