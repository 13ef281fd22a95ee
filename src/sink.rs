//! The engine's one external boundary: where finished rounds are reported.

use crate::error::SinkError;
use crate::outcome::RoundSummary;

/// Receives the final scores and result of each completed round.
///
/// The engine invokes the sink exactly once per round, after the outcome is
/// resolved. A failure is caught at the call site, logged, and otherwise
/// ignored; it never changes the round state or blocks a new round from
/// starting.
pub trait ResultSink {
    /// Records one completed round.
    ///
    /// # Errors
    ///
    /// Implementations may fail for any reason (storage rejected the write,
    /// the backend is unreachable); the engine treats all failures the same.
    fn record(&mut self, summary: &RoundSummary) -> Result<(), SinkError>;
}
