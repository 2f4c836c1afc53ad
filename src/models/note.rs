//! Note data model.

/// Lifecycle state of a note.
///
/// Transitions are one-way: `Active -> Hit` (judged by a keypress) or
/// `Active -> Missed` (detected by the sweeper). A resolved note is never
/// matched or counted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteStatus {
    Active,
    Hit,
    Missed,
}

/// A single falling note travelling towards the target line.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    /// Unique, monotonically increasing id for the session.
    pub id: u64,
    /// Lane index the note falls in (one lane per bound key).
    pub lane: usize,
    /// Distance from the left edge; decreases every tick.
    pub position_x: f32,
    pub status: NoteStatus,
}

impl Note {
    /// Creates a fresh note at the entry edge of the play area.
    pub fn spawn(id: u64, lane: usize, entry_x: f32) -> Self {
        Self {
            id,
            lane,
            position_x: entry_x,
            status: NoteStatus::Active,
        }
    }

    /// Absolute distance between the note and the target line.
    pub fn distance_to(&self, target_x: f32) -> f32 {
        (self.position_x - target_x).abs()
    }
}
