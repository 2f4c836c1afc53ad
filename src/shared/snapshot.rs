//! Immutable state snapshots for an external presentation layer.

use crate::models::note::Note;
use crate::models::stats::HitStats;
use crate::state::game::feedback::FeedbackMarker;

/// A render-ready capture of one logic tick.
///
/// Snapshots decouple the logic thread from whatever displays the game;
/// they are sent over a bounded channel and dropped if the consumer
/// lags.
#[derive(Debug, Clone)]
pub struct GameplaySnapshot {
    /// Engine clock in seconds since session start.
    pub clock: f64,
    /// Seconds left before the session ends.
    pub time_left: f64,
    /// Notes still worth drawing (hit notes are excluded).
    pub visible_notes: Vec<Note>,
    /// In-flight hit feedback markers.
    pub feedback: Vec<FeedbackMarker>,
    pub score: u32,
    pub stats: HitStats,
    pub accuracy: f64,
}
