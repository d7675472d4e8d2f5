//! Export lifecycle status machine.
//!
//! One export is a two-phase asynchronous operation (render, then
//! save) that must not be re-triggered while in flight. The machine
//! owns the single status value the UI observes and guards every
//! transition, so a stale caller — including the delayed
//! error-recovery timer — can never clobber a newer state.
//!
//! ```text
//! idle ──try_begin──► generating ──begin_download──► downloading ──complete──► idle
//!                        │                               │
//!                        └────────────fail───────────────┘
//!                                      ▼
//!                                    error ──recover (after delay)──► idle
//! ```

use std::fmt;

/// How long an export failure stays visible before the status
/// automatically returns to idle.
pub const ERROR_RECOVERY_MS: u32 = 3000;

/// Observable state of the export pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExportStatus {
    /// Nothing in flight; a trigger is accepted.
    #[default]
    Idle,
    /// Rasterization in progress.
    Generating,
    /// Rasterization done; save trigger in progress.
    Downloading,
    /// The last export failed; clears automatically after
    /// [`ERROR_RECOVERY_MS`]. A retry is accepted immediately.
    Error,
}

impl ExportStatus {
    /// Whether a trigger is accepted in this state.
    ///
    /// `Error` accepts so the user can retry without waiting out the
    /// recovery delay.
    #[must_use]
    pub const fn can_trigger(self) -> bool {
        matches!(self, Self::Idle | Self::Error)
    }

    /// Whether an export is currently in flight.
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Generating | Self::Downloading)
    }
}

impl fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::Generating => "generating",
            Self::Downloading => "downloading",
            Self::Error => "error",
        })
    }
}

/// Guarded transition core for the export lifecycle.
///
/// Every method is a guarded transition: called in the wrong state it
/// leaves the machine unchanged. The async driver holds exactly one
/// instance; the UI only ever reads [`status`](Self::status).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusMachine {
    status: ExportStatus,
}

impl StatusMachine {
    /// A machine in the idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: ExportStatus::Idle,
        }
    }

    /// The current status.
    #[must_use]
    pub const fn status(&self) -> ExportStatus {
        self.status
    }

    /// Accept a trigger, moving to `Generating`.
    ///
    /// Returns `false` — and changes nothing — while an export is in
    /// flight. This guard is the pipeline's only concurrency control:
    /// rejected triggers are dropped, not queued.
    pub fn try_begin(&mut self) -> bool {
        if self.status.can_trigger() {
            self.status = ExportStatus::Generating;
            true
        } else {
            false
        }
    }

    /// Rasterization finished; the save trigger is starting.
    pub fn begin_download(&mut self) {
        if self.status == ExportStatus::Generating {
            self.status = ExportStatus::Downloading;
        }
    }

    /// The save trigger completed; the cycle is over.
    pub fn complete(&mut self) {
        if self.status == ExportStatus::Downloading {
            self.status = ExportStatus::Idle;
        }
    }

    /// An in-flight export failed at either phase.
    pub fn fail(&mut self) {
        if self.status.is_busy() {
            self.status = ExportStatus::Error;
        }
    }

    /// Clear a displayed error back to idle.
    ///
    /// Only transitions out of `Error`; a delayed recovery firing
    /// after a newer trigger has already been accepted is a no-op.
    /// Returns whether the transition happened.
    pub fn recover(&mut self) -> bool {
        if self.status == ExportStatus::Error {
            self.status = ExportStatus::Idle;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn happy_path_cycles_back_to_idle() {
        let mut machine = StatusMachine::new();
        assert_eq!(machine.status(), ExportStatus::Idle);
        assert!(machine.try_begin());
        assert_eq!(machine.status(), ExportStatus::Generating);
        machine.begin_download();
        assert_eq!(machine.status(), ExportStatus::Downloading);
        machine.complete();
        assert_eq!(machine.status(), ExportStatus::Idle);
    }

    #[test]
    fn trigger_is_rejected_while_in_flight() {
        let mut machine = StatusMachine::new();
        assert!(machine.try_begin());
        assert!(!machine.try_begin());
        assert_eq!(machine.status(), ExportStatus::Generating);
        machine.begin_download();
        assert!(!machine.try_begin());
        assert_eq!(machine.status(), ExportStatus::Downloading);
    }

    #[test]
    fn failure_is_reported_from_both_phases() {
        let mut machine = StatusMachine::new();
        assert!(machine.try_begin());
        machine.fail();
        assert_eq!(machine.status(), ExportStatus::Error);

        let mut machine = StatusMachine::new();
        assert!(machine.try_begin());
        machine.begin_download();
        machine.fail();
        assert_eq!(machine.status(), ExportStatus::Error);
    }

    #[test]
    fn error_accepts_an_immediate_retry() {
        let mut machine = StatusMachine::new();
        assert!(machine.try_begin());
        machine.fail();
        assert!(machine.status().can_trigger());
        assert!(machine.try_begin());
        assert_eq!(machine.status(), ExportStatus::Generating);
    }

    #[test]
    fn recover_clears_only_a_displayed_error() {
        let mut machine = StatusMachine::new();
        assert!(machine.try_begin());
        machine.fail();
        assert!(machine.recover());
        assert_eq!(machine.status(), ExportStatus::Idle);
    }

    #[test]
    fn stale_recovery_cannot_clobber_a_newer_export() {
        // A retry accepted while the error is showing moves the
        // machine on; the old recovery timer must then do nothing.
        let mut machine = StatusMachine::new();
        assert!(machine.try_begin());
        machine.fail();
        assert!(machine.try_begin());
        assert!(!machine.recover());
        assert_eq!(machine.status(), ExportStatus::Generating);
    }

    #[test]
    fn out_of_order_transitions_change_nothing() {
        let mut machine = StatusMachine::new();
        machine.begin_download();
        machine.complete();
        machine.fail();
        assert_eq!(machine.status(), ExportStatus::Idle);
        assert!(!machine.recover());
    }

    #[test]
    fn status_displays_lowercase_names() {
        assert_eq!(ExportStatus::Idle.to_string(), "idle");
        assert_eq!(ExportStatus::Generating.to_string(), "generating");
        assert_eq!(ExportStatus::Downloading.to_string(), "downloading");
        assert_eq!(ExportStatus::Error.to_string(), "error");
    }
}
