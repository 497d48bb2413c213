//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured cycle events to the
//! logger (UART / console, whatever backend the host wires up). A
//! panel-display or telemetry adapter would implement the same trait.

use log::info;

use crate::app::events::CycleEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`CycleEvent`].
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &CycleEvent) {
        match event {
            CycleEvent::Started(program) => {
                info!("CYCLE | start program={:?}", program);
            }
            CycleEvent::PhaseChanged { from, to } => {
                info!("PHASE | {:?} -> {:?}", from, to);
            }
            CycleEvent::PreconditionFailed(status) => {
                info!("CHECK | refused: {status}");
            }
            CycleEvent::Completed(result) => {
                info!(
                    "DONE  | status={} run_minutes={}",
                    result.status, result.run_minutes
                );
            }
        }
    }
}
