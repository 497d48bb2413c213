//! Outbound application events.
//!
//! The [`CycleService`](super::service::CycleService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. Adapters on the other
//! side decide what to do with them — log to serial, drive the panel
//! display, feed telemetry.

use crate::config::WashProgram;

use super::service::{RunResult, Status};

/// Progress of one cycle invocation, coarse enough for a panel display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CyclePhase {
    /// Precondition checks: door, dirt filter.
    Checking,
    /// Requested program phase: pour, run, drain.
    Washing,
    /// Trailing rinse phase: pour, rinse, drain.
    Rinsing,
    /// Cycle ran to completion.
    Finished,
    /// Cycle aborted on a precondition or actuation failure.
    Faulted,
}

/// Structured events emitted by the cycle controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleEvent {
    /// A cycle invocation began (carries the requested program).
    Started(WashProgram),

    /// The cycle moved between phases.
    PhaseChanged { from: CyclePhase, to: CyclePhase },

    /// A precondition check refused the cycle before actuation.
    PreconditionFailed(Status),

    /// The cycle reached a terminal result (success or abort).
    Completed(RunResult),
}
