//! Transient on-hit feedback markers.

use crate::models::stats::Judgement;

/// A short-lived marker shown when a note is judged.
///
/// Each marker carries its own expiry on the engine clock and is swept
/// every tick, rather than being torn down by an independently
/// scheduled callback. Session teardown therefore cancels all markers
/// with the engine itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackMarker {
    pub judgement: Judgement,
    pub lane: usize,
    /// Engine clock time (seconds) at which the marker disappears.
    pub expires_at: f64,
}

impl FeedbackMarker {
    pub fn new(judgement: Judgement, lane: usize, expires_at: f64) -> Self {
        Self {
            judgement,
            lane,
            expires_at,
        }
    }

    pub fn is_expired(&self, clock: f64) -> bool {
        clock >= self.expires_at
    }
}
