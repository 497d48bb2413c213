//! Port traits — the hexagonal boundary between domain logic and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ CycleService (domain)
//! ```
//!
//! Driven adapters (latch, pump, engine, filter sensor, event sinks)
//! implement these traits. The [`CycleService`](super::service::CycleService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Pump and engine failures are typed — the controller must handle every
//! variant explicitly; nothing may escape a cycle as a panic or an
//! unhandled error.

use crate::config::{FillLevel, WashProgram};
use crate::error::{EngineError, PumpError};

// ───────────────────────────────────────────────────────────────
// Door port (latch sensor + lock actuator)
// ───────────────────────────────────────────────────────────────

/// Door latch: the one collaborator queried before anything else.
pub trait DoorPort {
    /// Whether the door is currently shut. May poll the latch switch.
    fn closed(&mut self) -> bool;

    /// Engage the interlock for the duration of the cycle. Only called
    /// after `closed()` has been observed true.
    fn lock(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Water pump port
// ───────────────────────────────────────────────────────────────

/// Fill and drain actuation. Both operations block until the water has
/// actually moved, or fail with a typed [`PumpError`].
pub trait WaterPumpPort {
    /// Fill the basin to the given level.
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError>;

    /// Empty the basin completely.
    fn drain(&mut self) -> Result<(), PumpError>;
}

// ───────────────────────────────────────────────────────────────
// Engine port (heating/drive unit)
// ───────────────────────────────────────────────────────────────

/// Runs one wash program to completion: circulation, heating, spray
/// arms. Blocks for the whole program or fails with an [`EngineError`].
pub trait EnginePort {
    fn run_program(&mut self, program: WashProgram) -> Result<(), EngineError>;
}

// ───────────────────────────────────────────────────────────────
// Dirt filter port (fouling sensor)
// ───────────────────────────────────────────────────────────────

/// Measures how fouled the dirt filter is. No failure mode defined;
/// a sensor that cannot answer reports its last known reading.
pub trait DirtFilterPort {
    fn capacity(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`CycleEvent`](super::events::CycleEvent)s
/// through this port. Adapters decide where they go (serial log, panel
/// display, telemetry).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::CycleEvent);
}
