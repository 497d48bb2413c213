//! Cycle controller — the hexagonal core.
//!
//! [`CycleService`] sequences one wash cycle: precondition checks, the
//! requested program phase, and the mandatory trailing rinse phase. It
//! exposes a clean, hardware-agnostic API. All I/O flows through port
//! traits injected at call sites, making the entire service testable
//! with mock adapters.
//!
//! ```text
//!  DoorPort ────▶ ┌────────────────────────┐ ──▶ EventSink
//!  FilterPort ──▶ │      CycleService       │
//!  PumpPort ◀────│  checks · wash · rinse  │
//!  EnginePort ◀──└────────────────────────┘
//! ```
//!
//! Collaborator failures never escape [`CycleService::start`]; every
//! outcome is reported as a [`RunResult`].

use core::fmt;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::{FillLevel, ProgramConfiguration, WashProgram};
use crate::diagnostics::{CycleLog, CycleRecord};
use crate::error::Error;

use super::events::{CycleEvent, CyclePhase};
use super::ports::{DirtFilterPort, DoorPort, EnginePort, EventSink, WaterPumpPort};

/// Fouling level at which the dirt filter is considered full. A reading
/// at or above this refuses the cycle when tablets are loaded.
pub const MAXIMAL_FILTER_CAPACITY: f32 = 50.0;

// ───────────────────────────────────────────────────────────────
// Terminal outcome
// ───────────────────────────────────────────────────────────────

/// Terminal status of one cycle invocation. Exactly one per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Both phases ran to completion.
    Success,
    /// Door was open; nothing else was touched.
    DoorOpen,
    /// Dirt filter at or beyond capacity; pump and engine untouched.
    ErrorFilter,
    /// Engine failed mid-phase.
    ErrorProgram,
    /// Water pump failed mid-phase.
    ErrorPump,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::DoorOpen => write!(f, "door open"),
            Self::ErrorFilter => write!(f, "dirt filter full"),
            Self::ErrorProgram => write!(f, "engine failure"),
            Self::ErrorPump => write!(f, "pump failure"),
        }
    }
}

/// What one `start` call hands back to the caller.
///
/// `run_minutes` is meaningful only for [`Status::Success`] and reports
/// the requested program's fixed duration; the trailing rinse is not
/// included in the figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunResult {
    pub status: Status,
    pub run_minutes: u32,
}

impl RunResult {
    /// A completed cycle with the requested program's duration.
    pub fn success(run_minutes: u32) -> Self {
        Self {
            status: Status::Success,
            run_minutes,
        }
    }

    /// An aborted cycle. `status` must not be `Success`.
    pub fn aborted(status: Status) -> Self {
        debug_assert!(status != Status::Success);
        Self {
            status,
            run_minutes: 0,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// CycleService
// ───────────────────────────────────────────────────────────────

/// The cycle controller. Owns no hardware (ports are injected per
/// call) and keeps only cross-cycle bookkeeping: an invocation
/// counter and the outcome history ring.
pub struct CycleService {
    cycles_run: u64,
    last_result: Option<RunResult>,
    history: CycleLog,
}

impl CycleService {
    pub fn new() -> Self {
        Self {
            cycles_run: 0,
            last_result: None,
            history: CycleLog::new(),
        }
    }

    /// Run one full wash cycle.
    ///
    /// Sequence: door check, conditional filter check, door lock, then
    /// pour → run → drain for the requested program and once more for
    /// the rinse program. The first collaborator failure aborts the
    /// rest of the sequence.
    ///
    /// The `hw` parameter satisfies all four collaborator ports — this
    /// avoids a tangle of mutable borrows while keeping the port
    /// boundary explicit.
    pub fn start(
        &mut self,
        config: &ProgramConfiguration,
        hw: &mut (impl DoorPort + WaterPumpPort + EnginePort + DirtFilterPort),
        sink: &mut impl EventSink,
    ) -> RunResult {
        self.cycles_run += 1;
        sink.emit(&CycleEvent::Started(config.program));
        info!(
            "cycle {}: program={:?} fill={:?} tablets={}",
            self.cycles_run, config.program, config.fill_level, config.tablets_used
        );

        // Door first. Nothing else may be touched while it is open.
        if !hw.closed() {
            warn!("cycle refused: door open");
            sink.emit(&CycleEvent::PreconditionFailed(Status::DoorOpen));
            return self.finish(config, RunResult::aborted(Status::DoorOpen), sink);
        }

        // Filter check applies only to tablet loads. The sensor must
        // not be queried otherwise.
        if config.tablets_used {
            let fouling = hw.capacity();
            if fouling >= MAXIMAL_FILTER_CAPACITY {
                warn!(
                    "cycle refused: filter fouled to {:.1} (limit {:.1})",
                    fouling, MAXIMAL_FILTER_CAPACITY
                );
                sink.emit(&CycleEvent::PreconditionFailed(Status::ErrorFilter));
                return self.finish(config, RunResult::aborted(Status::ErrorFilter), sink);
            }
        }

        // Preconditions passed: engage the interlock, exactly once.
        hw.lock();
        sink.emit(&CycleEvent::PhaseChanged {
            from: CyclePhase::Checking,
            to: CyclePhase::Washing,
        });

        if let Err(e) = run_phase(config.program, config.fill_level, hw) {
            warn!("wash phase aborted: {e}");
            sink.emit(&CycleEvent::PhaseChanged {
                from: CyclePhase::Washing,
                to: CyclePhase::Faulted,
            });
            return self.finish(config, RunResult::aborted(abort_status(e)), sink);
        }

        sink.emit(&CycleEvent::PhaseChanged {
            from: CyclePhase::Washing,
            to: CyclePhase::Rinsing,
        });

        // Every cycle ends with a rinse at the same fill level.
        if let Err(e) = run_phase(WashProgram::Rinse, config.fill_level, hw) {
            warn!("rinse phase aborted: {e}");
            sink.emit(&CycleEvent::PhaseChanged {
                from: CyclePhase::Rinsing,
                to: CyclePhase::Faulted,
            });
            return self.finish(config, RunResult::aborted(abort_status(e)), sink);
        }

        sink.emit(&CycleEvent::PhaseChanged {
            from: CyclePhase::Rinsing,
            to: CyclePhase::Finished,
        });

        let minutes = config.program.time_in_minutes();
        info!("cycle complete: {minutes} min");
        self.finish(config, RunResult::success(minutes), sink)
    }

    // ── Queries ───────────────────────────────────────────────

    /// Total `start` invocations since construction.
    pub fn cycles_run(&self) -> u64 {
        self.cycles_run
    }

    /// Outcome of the most recent cycle, if any ran.
    pub fn last_result(&self) -> Option<RunResult> {
        self.last_result
    }

    /// Ring of recent cycle outcomes.
    pub fn history(&self) -> &CycleLog {
        &self.history
    }

    // ── Internal ──────────────────────────────────────────────

    /// Record the terminal result and notify the sink.
    fn finish(
        &mut self,
        config: &ProgramConfiguration,
        result: RunResult,
        sink: &mut impl EventSink,
    ) -> RunResult {
        self.last_result = Some(result);
        self.history.record(CycleRecord::new(config, &result));
        sink.emit(&CycleEvent::Completed(result));
        result
    }
}

impl Default for CycleService {
    fn default() -> Self {
        Self::new()
    }
}

/// One program phase: pour → run → drain. The `?` operator funnels
/// both collaborator error types through [`Error`].
fn run_phase(
    program: WashProgram,
    level: FillLevel,
    hw: &mut (impl WaterPumpPort + EnginePort),
) -> crate::Result<()> {
    hw.pour(level)?;
    hw.run_program(program)?;
    hw.drain()?;
    Ok(())
}

/// Map an actuation failure to its terminal status family.
fn abort_status(e: Error) -> Status {
    match e {
        Error::Pump(_) => Status::ErrorPump,
        Error::Engine(_) => Status::ErrorProgram,
    }
}
