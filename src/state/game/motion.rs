//! Motion integration and lifecycle sweeping.
//!
//! Both passes are pure functions over the note collection so they can
//! be tested without an engine or a clock. Within a tick, integration
//! always runs before the sweep: a note is never judged missed on its
//! pre-tick position.

use crate::models::note::{Note, NoteStatus};
use crate::models::stats::Judgement;
use crate::shared::messages::GameEvent;

/// Advances every note towards the target by `speed * dt`.
///
/// Pure function of the inputs; identity and order of the notes are
/// preserved. `dt` may be zero (first frame) and carries no fixed-rate
/// assumption.
pub fn integrate(mut notes: Vec<Note>, dt: f64, speed: f32) -> Vec<Note> {
    let step = (speed as f64 * dt) as f32;
    for note in &mut notes {
        note.position_x -= step;
    }
    notes
}

/// Removes expired notes and reports misses.
///
/// An active note past `target_x - bad` is marked missed, counted once,
/// and removed. Any resolved note past `despawn_x` is removed silently
/// so the collection never grows without bound. The miss check runs
/// first; a removed note can never be re-evaluated, so running the
/// sweep twice without integration in between emits nothing new.
pub fn sweep(
    mut notes: Vec<Note>,
    target_x: f32,
    bad: f32,
    despawn_x: f32,
) -> (Vec<Note>, Vec<GameEvent>) {
    let mut events = Vec::new();
    let miss_x = target_x - bad;

    for note in &mut notes {
        if note.status == NoteStatus::Active && note.position_x < miss_x {
            note.status = NoteStatus::Missed;
            events.push(GameEvent::StatIncrement(Judgement::Miss));
        }
    }

    notes.retain(|n| n.status != NoteStatus::Missed && n.position_x > despawn_x);

    (notes, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn note(id: u64, lane: usize, x: f32) -> Note {
        Note::spawn(id, lane, x)
    }

    #[test]
    fn zero_dt_moves_nothing() {
        let notes = vec![note(0, 0, 400.0), note(1, 2, 123.5)];
        let moved = integrate(notes.clone(), 0.0, 200.0);
        assert_eq!(moved, notes);
    }

    #[test]
    fn integration_accumulates_over_variable_frames() {
        let notes = vec![note(0, 0, 1000.0)];
        // 4.55s in uneven slices.
        let mut notes = notes;
        for dt in [1.0, 0.25, 2.3, 1.0] {
            notes = integrate(notes, dt, 200.0);
        }
        assert!((notes[0].position_x - 90.0).abs() < 1e-3);
    }

    #[test]
    fn active_note_past_miss_line_yields_one_miss() {
        let notes = vec![note(0, 1, 9.9)];
        let (kept, events) = sweep(notes, 50.0, 40.0, -50.0);
        assert!(kept.is_empty());
        assert_eq!(events, vec![GameEvent::StatIncrement(Judgement::Miss)]);
    }

    #[test]
    fn note_on_miss_boundary_is_not_missed_yet() {
        // position == target - bad is still in play (strictly below).
        let notes = vec![note(0, 1, 10.0)];
        let (kept, events) = sweep(notes, 50.0, 40.0, -50.0);
        assert_eq!(kept.len(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn hit_notes_linger_until_off_screen() {
        let mut near = note(0, 0, 5.0);
        near.status = NoteStatus::Hit;
        let mut far = note(1, 0, -60.0);
        far.status = NoteStatus::Hit;

        let (kept, events) = sweep(vec![near, far], 50.0, 40.0, -50.0);
        assert!(events.is_empty());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 0);
    }

    #[test]
    fn sweep_is_idempotent_without_integration() {
        let notes = vec![note(0, 0, 5.0), note(1, 1, 300.0), note(2, 2, 60.0)];
        let (once, first_events) = sweep(notes, 50.0, 40.0, -50.0);
        assert_eq!(first_events.len(), 1);

        let (twice, second_events) = sweep(once.clone(), 50.0, 40.0, -50.0);
        assert_eq!(once, twice);
        assert!(second_events.is_empty());
    }

    proptest! {
        #[test]
        fn integration_is_elementwise_and_order_preserving(
            positions in proptest::collection::vec(-100.0f32..2000.0, 0..32),
            dt in 0.0f64..5.0,
            speed in 0.0f32..500.0,
        ) {
            let notes: Vec<Note> = positions
                .iter()
                .enumerate()
                .map(|(i, &x)| note(i as u64, i % 4, x))
                .collect();

            let moved = integrate(notes.clone(), dt, speed);

            prop_assert_eq!(moved.len(), notes.len());
            for (before, after) in notes.iter().zip(&moved) {
                prop_assert_eq!(before.id, after.id);
                prop_assert_eq!(before.lane, after.lane);
                prop_assert_eq!(before.status, after.status);
                let expected = before.position_x - (speed as f64 * dt) as f32;
                prop_assert!((after.position_x - expected).abs() < 1e-3);
            }
        }
    }
}
