//! Cycle history diagnostics.
//!
//! Keeps the outcomes of the most recent cycles in a fixed-capacity
//! ring so a service technician (or the panel's info screen) can read
//! back what the machine last did. In-memory only; entries do not
//! survive a power cycle.

use serde::{Deserialize, Serialize};

use crate::app::service::{RunResult, Status};
use crate::config::{FillLevel, ProgramConfiguration, WashProgram};

const HISTORY_SLOTS: usize = 8;

/// One finished cycle, flattened for readback.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CycleRecord {
    pub program: WashProgram,
    pub fill_level: FillLevel,
    pub tablets_used: bool,
    pub status: Status,
    pub run_minutes: u32,
}

impl CycleRecord {
    pub fn new(config: &ProgramConfiguration, result: &RunResult) -> Self {
        Self {
            program: config.program,
            fill_level: config.fill_level,
            tablets_used: config.tablets_used,
            status: result.status,
            run_minutes: result.run_minutes,
        }
    }
}

/// Fixed-slot ring of recent [`CycleRecord`]s, oldest evicted first.
pub struct CycleLog {
    entries: heapless::Deque<CycleRecord, HISTORY_SLOTS>,
}

impl CycleLog {
    pub const fn new() -> Self {
        Self {
            entries: heapless::Deque::new(),
        }
    }

    /// Append an outcome, evicting the oldest when the ring is full.
    pub fn record(&mut self, record: CycleRecord) {
        if self.entries.is_full() {
            let _ = self.entries.pop_front();
        }
        let _ = self.entries.push_back(record);
    }

    /// Most recent outcome, if any.
    pub fn last(&self) -> Option<&CycleRecord> {
        self.entries.back()
    }

    /// Oldest-first iteration over stored outcomes.
    pub fn iter(&self) -> impl Iterator<Item = &CycleRecord> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CycleLog {
    fn default() -> Self {
        Self::new()
    }
}
