//! Core gameplay engine for the falling-note minigame.
//!
//! The `GameEngine` owns the note collection for the duration of a
//! playing session and runs two independent periodic activities:
//! - `tick(dt)`: variable-delta motion integration followed by the
//!   lifecycle sweep, driven by the logic clock every frame.
//! - `handle_spawn_tick()`: fixed-interval note spawning, paced by the
//!   caller so spawn cadence stays decoupled from frame rate.
//!
//! Key presses are judged through `on_key_press`. All mutation of the
//! note collection is serialized through these three handlers.

pub mod feedback;
mod input;
pub mod motion;
pub mod spawner;

use crate::core::input::LaneBindings;
use crate::models::{GameConfig, HitWindow, Note, NoteStatus};
use crate::shared::messages::GameEvent;
use feedback::FeedbackMarker;
use spawner::NoteSpawner;

pub struct GameEngine {
    /// All in-flight notes, in spawn order. Insertion order doubles as
    /// the deterministic tie-break for the hit judge.
    pub(crate) notes: Vec<Note>,
    /// Next note id; never reused within a session.
    next_note_id: u64,
    /// Engine clock in seconds since session start.
    clock: f64,
    /// Entry edge for new notes. `None` until the play area has been
    /// measured; spawns are skipped meanwhile.
    play_width: Option<f32>,
    /// Live hit feedback markers, each with its own expiry.
    pub(crate) feedback: Vec<FeedbackMarker>,

    pub(crate) bindings: LaneBindings,
    spawner: NoteSpawner,

    speed: f32,
    pub(crate) target_x: f32,
    despawn_x: f32,
    pub(crate) hit_window: HitWindow,
    feedback_duration: f64,
}

impl GameEngine {
    pub fn new(config: &GameConfig, bindings: LaneBindings, spawner: NoteSpawner) -> Self {
        Self {
            notes: Vec::new(),
            next_note_id: 0,
            clock: 0.0,
            play_width: None,
            feedback: Vec::new(),
            bindings,
            spawner,
            speed: config.note_speed,
            target_x: config.target_x,
            despawn_x: config.despawn_x,
            hit_window: config.windows,
            feedback_duration: config.feedback_duration_secs,
        }
    }

    /// Advances the simulation by `dt` seconds.
    ///
    /// Integration runs before the sweep, so a note is judged against
    /// its post-tick position. Returns the miss events detected by the
    /// sweep, in note order.
    pub fn tick(&mut self, dt: f64) -> Vec<GameEvent> {
        self.clock += dt;

        let notes = std::mem::take(&mut self.notes);
        let notes = motion::integrate(notes, dt, self.speed);
        let (notes, events) =
            motion::sweep(notes, self.target_x, self.hit_window.bad, self.despawn_x);
        self.notes = notes;

        let clock = self.clock;
        self.feedback.retain(|m| !m.is_expired(clock));

        events
    }

    /// Spawns one note at the entry edge, on the caller's fixed
    /// interval. Skipped (and retried next interval) while the play
    /// area width is unknown.
    pub fn handle_spawn_tick(&mut self) {
        let Some(width) = self.play_width else {
            log::debug!("ENGINE: Spawn skipped, play area not yet measured");
            return;
        };

        let note = self.spawner.spawn(self.next_note_id, width);
        self.next_note_id += 1;
        self.notes.push(note);
    }

    /// Records the measured play area width. Notes spawn at this edge.
    pub fn set_play_width(&mut self, width: f32) {
        if width <= 0.0 {
            log::warn!("ENGINE: Ignoring non-positive play width {}", width);
            return;
        }
        self.play_width = Some(width);
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Notes an external renderer should draw: everything still
    /// unresolved. Hit notes stay in the collection until swept but are
    /// not worth drawing.
    pub fn visible_notes(&self) -> Vec<Note> {
        self.notes
            .iter()
            .filter(|n| n.status == NoteStatus::Active)
            .cloned()
            .collect()
    }

    pub fn feedback(&self) -> &[FeedbackMarker] {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::Judgement;

    const KEYS: [char; 4] = ['a', 's', 'd', 'f'];

    fn test_engine(seed: u64) -> GameEngine {
        let config = GameConfig::default();
        let bindings = LaneBindings::from_config(&config.keys);
        let spawner = NoteSpawner::with_seed(bindings.lane_count(), seed);
        GameEngine::new(&config, bindings, spawner)
    }

    #[test]
    fn spawn_is_skipped_until_play_area_is_measured() {
        let mut engine = test_engine(1);
        engine.handle_spawn_tick();
        assert!(engine.notes.is_empty());

        engine.set_play_width(1000.0);
        engine.handle_spawn_tick();
        assert_eq!(engine.notes.len(), 1);
        assert_eq!(engine.notes[0].position_x, 1000.0);
    }

    #[test]
    fn note_ids_are_fresh_and_monotonic() {
        let mut engine = test_engine(2);
        engine.set_play_width(800.0);
        for _ in 0..5 {
            engine.handle_spawn_tick();
        }
        let ids: Vec<u64> = engine.notes.iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn note_rides_to_the_line_and_judges_perfect() {
        // Scenario from the original tuning: spawn at 1000, target 50,
        // speed 200/s, bad window 40.
        let mut engine = test_engine(3);
        engine.set_play_width(1000.0);
        engine.handle_spawn_tick();
        let key = KEYS[engine.notes[0].lane];

        // After 4.55s: position ~90, eligible but not yet missed.
        let events = engine.tick(4.55);
        assert!(events.is_empty());
        assert_eq!(engine.notes[0].status, NoteStatus::Active);
        assert!((engine.notes[0].position_x - 90.0).abs() < 1e-3);

        // 0.2s later the note sits exactly on the target line.
        let events = engine.tick(0.2);
        assert!(events.is_empty());
        let events = engine.on_key_press(key);
        assert_eq!(
            events,
            vec![
                GameEvent::ScoreDelta(25),
                GameEvent::StatIncrement(Judgement::Perfect),
            ]
        );
    }

    #[test]
    fn unhit_note_is_missed_exactly_once() {
        let mut engine = test_engine(4);
        engine.set_play_width(1000.0);
        engine.handle_spawn_tick();

        // Ride past target_x - bad = 10 without any keypress.
        let events = engine.tick(4.96);
        assert_eq!(events, vec![GameEvent::StatIncrement(Judgement::Miss)]);
        assert!(engine.notes.is_empty());

        // Further ticks cannot re-report the removed note.
        assert!(engine.tick(0.0).is_empty());
        assert!(engine.tick(1.0).is_empty());
    }

    #[test]
    fn hit_note_emits_no_further_events() {
        let mut engine = test_engine(5);
        engine.set_play_width(1000.0);
        engine.handle_spawn_tick();
        let key = KEYS[engine.notes[0].lane];

        engine.tick(4.75);
        assert!(!engine.on_key_press(key).is_empty());

        // The resolved note neither misses nor matches again.
        assert!(engine.on_key_press(key).is_empty());
        assert!(engine.tick(5.0).is_empty());
        assert!(engine.notes.is_empty());
    }

    #[test]
    fn feedback_markers_expire_on_the_engine_clock() {
        let mut engine = test_engine(6);
        engine.set_play_width(1000.0);
        engine.handle_spawn_tick();
        let key = KEYS[engine.notes[0].lane];

        engine.tick(4.75);
        engine.on_key_press(key);
        assert_eq!(engine.feedback().len(), 1);

        // Default marker lifetime is 0.5s of engine time.
        engine.tick(0.3);
        assert_eq!(engine.feedback().len(), 1);
        engine.tick(0.3);
        assert!(engine.feedback().is_empty());
    }

    #[test]
    fn visible_notes_exclude_hit_notes() {
        let mut engine = test_engine(7);
        engine.set_play_width(1000.0);
        engine.handle_spawn_tick();
        let key = KEYS[engine.notes[0].lane];

        engine.tick(4.75);
        engine.on_key_press(key);
        assert_eq!(engine.notes.len(), 1);
        assert!(engine.visible_notes().is_empty());
    }
}
