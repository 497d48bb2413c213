//! Unified error types for the AquaWash core.
//!
//! A single `Error` enum that both fallible collaborators convert into,
//! keeping the cycle controller's error handling uniform. All variants
//! are `Copy` so they can be cheaply passed around without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible actuation in a cycle funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The water pump failed while pouring or draining.
    Pump(PumpError),
    /// The heating/drive engine failed while executing a program.
    Engine(EngineError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pump(e) => write!(f, "pump: {e}"),
            Self::Engine(e) => write!(f, "engine: {e}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Pump errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpError {
    /// Inlet valve open but no water reached the basin in time.
    InletBlocked,
    /// Drain path obstructed; basin did not empty.
    DrainClogged,
    /// Motor drew more current than the driver allows.
    Overcurrent,
}

impl fmt::Display for PumpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InletBlocked => write!(f, "inlet blocked"),
            Self::DrainClogged => write!(f, "drain clogged"),
            Self::Overcurrent => write!(f, "overcurrent"),
        }
    }
}

impl From<PumpError> for Error {
    fn from(e: PumpError) -> Self {
        Self::Pump(e)
    }
}

// ---------------------------------------------------------------------------
// Engine errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Circulation motor stalled mid-program.
    MotorStall,
    /// Heating element failed to reach the program temperature.
    HeaterFault,
    /// Program sequencer stopped responding.
    SequencerTimeout,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MotorStall => write!(f, "motor stall"),
            Self::HeaterFault => write!(f, "heater fault"),
            Self::SequencerTimeout => write!(f, "sequencer timeout"),
        }
    }
}

impl From<EngineError> for Error {
    fn from(e: EngineError) -> Self {
        Self::Engine(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
