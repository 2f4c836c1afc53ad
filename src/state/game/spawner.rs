//! Periodic note spawning.

use crate::models::note::Note;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Creates one note per spawn tick in a uniformly random lane.
///
/// The random source is owned by the spawner and seedable, so tests can
/// make lane selection deterministic instead of reaching for an ambient
/// global RNG.
pub struct NoteSpawner {
    rng: SmallRng,
    lane_count: usize,
}

impl NoteSpawner {
    pub fn new(lane_count: usize) -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
            lane_count,
        }
    }

    pub fn with_seed(lane_count: usize, seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            lane_count,
        }
    }

    /// Spawns a note at the entry edge of the play area.
    pub fn spawn(&mut self, id: u64, entry_x: f32) -> Note {
        let lane = self.rng.random_range(0..self.lane_count);
        Note::spawn(id, lane, entry_x)
    }
}
