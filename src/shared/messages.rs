//! Message types exchanged between the main, input and logic threads.

use crate::models::stats::Judgement;
use crate::state::session::SessionSummary;

/// A raw key press from the input thread, not yet validated against the
/// bindings.
#[derive(Debug, Clone, Copy)]
pub struct KeyPress {
    pub key: char,
}

/// Events emitted by the engine, consumed by the session layer.
///
/// These are immutable deltas: the engine owns no persistent aggregate,
/// the session reducer applies them sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Points awarded for a successful hit.
    ScoreDelta(u32),
    /// One judged note of the given tier (hits and sweeper misses).
    StatIncrement(Judgement),
}

/// Lifecycle commands sent to the logic thread.
#[derive(Debug, Clone, Copy)]
pub enum SessionCommand {
    /// Begin a fresh playing session.
    Start,
    /// End the current session early. Halts both the motion tick and
    /// the spawn interval; no further events are emitted.
    Stop,
    /// Play area width became known or changed.
    Resize { width: f32 },
    /// Tear down the logic thread entirely.
    Shutdown,
}

/// Updates published by the logic thread.
#[derive(Debug, Clone)]
pub enum SessionUpdate {
    Event(GameEvent),
    Finished(SessionSummary),
}
