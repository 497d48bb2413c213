//! Wash program configuration
//!
//! Value types describing one requested wash cycle. A configuration is
//! built fully populated by the caller (control panel, bench harness)
//! and never mutated afterwards. Serde derives allow provisioning over
//! whatever transport the host provides.

use serde::{Deserialize, Serialize};

/// Named wash routines with fixed durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WashProgram {
    /// Heavy soil: pre-wash, high temperature main wash.
    Intensive,
    /// Low temperature, long soak — the default program.
    Eco,
    /// Lightly soiled loads, short turnaround.
    Quick,
    /// Rinse only. Also appended to every cycle as the trailing phase.
    Rinse,
}

impl WashProgram {
    /// Fixed duration of the program in minutes.
    pub const fn time_in_minutes(self) -> u32 {
        match self {
            Self::Intensive => 140,
            Self::Eco => 120,
            Self::Quick => 40,
            Self::Rinse => 15,
        }
    }
}

/// Water volume setting passed to the pump when filling the basin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillLevel {
    /// Half load — upper basket only.
    Half,
    /// Full load.
    Full,
}

/// One fully populated cycle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramConfiguration {
    /// The requested wash program.
    pub program: WashProgram,
    /// Basin fill volume for every pour in this cycle.
    pub fill_level: FillLevel,
    /// Whether detergent tablets are loaded. Tablets shed residue into
    /// the dirt filter, so the fouling check only applies when true.
    pub tablets_used: bool,
}

impl ProgramConfiguration {
    /// Construct a configuration. All fields are required.
    pub fn new(program: WashProgram, fill_level: FillLevel, tablets_used: bool) -> Self {
        Self {
            program,
            fill_level,
            tablets_used,
        }
    }
}
