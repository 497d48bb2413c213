//! AquaWash wash-cycle controller library.
//!
//! Pure-logic core for sequencing a dishwasher wash cycle: precondition
//! checks, ordered actuation of pump and engine, and a terminal run
//! result. All I/O flows through port traits, so the whole crate runs
//! on the host without real peripherals. A host process (machine
//! firmware, bench harness) wires adapters to the ports and owns the
//! entry point; this crate has none.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod diagnostics;

mod error;

pub mod adapters;
pub mod drivers;

pub use error::{EngineError, Error, PumpError, Result};
