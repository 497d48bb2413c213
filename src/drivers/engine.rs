//! Heating/drive engine simulation.
//!
//! Executes a wash program "instantly" on the bench: records which
//! program ran and how many have run. A stall switch reproduces the
//! circulation-motor failure mode.

use crate::config::WashProgram;
use crate::error::EngineError;

pub struct EngineDriver {
    last_program: Option<WashProgram>,
    programs_run: u32,
    stalled: bool,
}

impl EngineDriver {
    pub fn new() -> Self {
        Self {
            last_program: None,
            programs_run: 0,
            stalled: false,
        }
    }

    /// Run one program to completion.
    pub fn run_program(&mut self, program: WashProgram) -> Result<(), EngineError> {
        if self.stalled {
            return Err(EngineError::MotorStall);
        }
        self.last_program = Some(program);
        self.programs_run += 1;
        Ok(())
    }

    pub fn last_program(&self) -> Option<WashProgram> {
        self.last_program
    }

    pub fn programs_run(&self) -> u32 {
        self.programs_run
    }

    // ── Bench fault switch ────────────────────────────────────

    pub fn set_stalled(&mut self, stalled: bool) {
        self.stalled = stalled;
    }
}

impl Default for EngineDriver {
    fn default() -> Self {
        Self::new()
    }
}
