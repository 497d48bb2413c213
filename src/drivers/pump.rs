//! Water pump simulation.
//!
//! Models the basin fill state driven by the inlet and drain paths.
//! Fault switches let a bench operator reproduce the two field
//! failures that matter: a blocked inlet and a clogged drain.
//!
//! The pump is a dumb actuator; whether it is safe to pour is the
//! cycle controller's decision, not the driver's.

use crate::config::FillLevel;
use crate::error::PumpError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasinState {
    Empty,
    Filled(FillLevel),
}

pub struct WaterPumpDriver {
    basin: BasinState,
    inlet_blocked: bool,
    drain_clogged: bool,
}

impl WaterPumpDriver {
    pub fn new() -> Self {
        Self {
            basin: BasinState::Empty,
            inlet_blocked: false,
            drain_clogged: false,
        }
    }

    /// Fill the basin to `level`.
    pub fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        if self.inlet_blocked {
            return Err(PumpError::InletBlocked);
        }
        self.basin = BasinState::Filled(level);
        Ok(())
    }

    /// Empty the basin.
    pub fn drain(&mut self) -> Result<(), PumpError> {
        if self.drain_clogged {
            return Err(PumpError::DrainClogged);
        }
        self.basin = BasinState::Empty;
        Ok(())
    }

    pub fn basin(&self) -> BasinState {
        self.basin
    }

    // ── Bench fault switches ──────────────────────────────────

    pub fn set_inlet_blocked(&mut self, blocked: bool) {
        self.inlet_blocked = blocked;
    }

    pub fn set_drain_clogged(&mut self, clogged: bool) {
        self.drain_clogged = clogged;
    }
}

impl Default for WaterPumpDriver {
    fn default() -> Self {
        Self::new()
    }
}
