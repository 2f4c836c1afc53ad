//! Keypress handling for GameEngine - the hit judge.

use super::GameEngine;
use crate::models::note::NoteStatus;
use crate::shared::messages::GameEvent;
use crate::state::game::feedback::FeedbackMarker;

impl GameEngine {
    /// Judges a raw key press against the current note collection.
    ///
    /// The first active note in the mapped lane within the eligibility
    /// window (bad + slack) is matched; search order is insertion
    /// order, which keeps the tie-break deterministic when a lane holds
    /// more than one candidate. A press with no candidate is silently
    /// ignored: wrong lane, empty lane or an already resolved note is
    /// not penalized.
    pub fn on_key_press(&mut self, key: char) -> Vec<GameEvent> {
        let Some(lane) = self.bindings.lane_for(key) else {
            return Vec::new();
        };

        let target_x = self.target_x;
        let window = self.hit_window;
        let candidate = self
            .notes
            .iter()
            .position(|n| {
                n.status == NoteStatus::Active
                    && n.lane == lane
                    && window.is_eligible(n.distance_to(target_x))
            });

        let Some(idx) = candidate else {
            return Vec::new();
        };

        let distance = self.notes[idx].distance_to(target_x);
        self.notes[idx].status = NoteStatus::Hit;

        match window.judge(distance) {
            Some(judgement) => {
                log::debug!(
                    "JUDGE: {} on lane {} at distance {:.1}",
                    judgement,
                    lane,
                    distance
                );
                self.feedback.push(FeedbackMarker::new(
                    judgement,
                    lane,
                    self.clock + self.feedback_duration,
                ));
                vec![
                    GameEvent::ScoreDelta(judgement.points()),
                    GameEvent::StatIncrement(judgement),
                ]
            }
            // Slack-zone press: the note is consumed so it cannot be hit
            // again, but it scores nothing and shows no feedback.
            None => Vec::new(),
        }
    }
}
