//! Appliance adapter — bridges the bench peripherals to the domain
//! port traits.
//!
//! Owns the latch, pump, engine, and filter-sensor drivers, exposing
//! them through the four collaborator ports. This is the only module
//! that touches the driver layer; the domain core sees ports only.

use crate::app::ports::{DirtFilterPort, DoorPort, EnginePort, WaterPumpPort};
use crate::config::{FillLevel, WashProgram};
use crate::drivers::door::DoorLatch;
use crate::drivers::engine::EngineDriver;
use crate::drivers::filter::DirtFilterSensor;
use crate::drivers::pump::WaterPumpDriver;
use crate::error::{EngineError, PumpError};

/// Concrete adapter that combines all bench hardware behind the ports.
pub struct ApplianceAdapter {
    door: DoorLatch,
    pump: WaterPumpDriver,
    engine: EngineDriver,
    filter: DirtFilterSensor,
}

impl ApplianceAdapter {
    pub fn new(
        door: DoorLatch,
        pump: WaterPumpDriver,
        engine: EngineDriver,
        filter: DirtFilterSensor,
    ) -> Self {
        Self {
            door,
            pump,
            engine,
            filter,
        }
    }

    // ── Bench access to the underlying drivers ────────────────

    pub fn door_mut(&mut self) -> &mut DoorLatch {
        &mut self.door
    }

    pub fn pump_mut(&mut self) -> &mut WaterPumpDriver {
        &mut self.pump
    }

    pub fn engine(&self) -> &EngineDriver {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut EngineDriver {
        &mut self.engine
    }

    pub fn filter_mut(&mut self) -> &mut DirtFilterSensor {
        &mut self.filter
    }
}

impl Default for ApplianceAdapter {
    fn default() -> Self {
        Self::new(
            DoorLatch::new(),
            WaterPumpDriver::new(),
            EngineDriver::new(),
            DirtFilterSensor::new(),
        )
    }
}

// ── Port implementations ──────────────────────────────────────

impl DoorPort for ApplianceAdapter {
    fn closed(&mut self) -> bool {
        self.door.is_closed()
    }

    fn lock(&mut self) {
        self.door.lock();
    }
}

impl WaterPumpPort for ApplianceAdapter {
    fn pour(&mut self, level: FillLevel) -> Result<(), PumpError> {
        self.pump.pour(level)
    }

    fn drain(&mut self) -> Result<(), PumpError> {
        self.pump.drain()
    }
}

impl EnginePort for ApplianceAdapter {
    fn run_program(&mut self, program: WashProgram) -> Result<(), EngineError> {
        self.engine.run_program(program)
    }
}

impl DirtFilterPort for ApplianceAdapter {
    fn capacity(&mut self) -> f32 {
        self.filter.read()
    }
}
