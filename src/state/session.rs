//! Session-level score and stat aggregation.
//!
//! The engine emits immutable `GameEvent` records; this reducer applies
//! them sequentially. Keeping the aggregate out of the engine means no
//! counter is ever mutated from two periodic triggers at once.

use crate::models::stats::HitStats;
use crate::shared::messages::GameEvent;

/// Running aggregate for one playing session.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub score: u32,
    pub stats: HitStats,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one engine event to the aggregate.
    pub fn apply(&mut self, event: GameEvent) {
        match event {
            GameEvent::ScoreDelta(points) => self.score += points,
            GameEvent::StatIncrement(judgement) => self.stats.record(judgement),
        }
    }

    /// Final figures published when the session ends.
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            score: self.score,
            stats: self.stats.clone(),
            accuracy: self.stats.calculate_accuracy(),
        }
    }
}

/// End-of-session results handed to the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub score: u32,
    pub stats: HitStats,
    pub accuracy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::stats::Judgement;

    #[test]
    fn reducer_accumulates_score_and_stats() {
        let mut session = SessionState::new();
        session.apply(GameEvent::ScoreDelta(25));
        session.apply(GameEvent::StatIncrement(Judgement::Perfect));
        session.apply(GameEvent::ScoreDelta(15));
        session.apply(GameEvent::StatIncrement(Judgement::Good));
        session.apply(GameEvent::StatIncrement(Judgement::Miss));

        assert_eq!(session.score, 40);
        assert_eq!(session.stats.perfect, 1);
        assert_eq!(session.stats.good, 1);
        assert_eq!(session.stats.miss, 1);
    }

    #[test]
    fn summary_reflects_the_aggregate() {
        let mut session = SessionState::new();
        session.apply(GameEvent::ScoreDelta(25));
        session.apply(GameEvent::StatIncrement(Judgement::Perfect));

        let summary = session.summary();
        assert_eq!(summary.score, 25);
        assert_eq!(summary.stats.total(), 1);
        assert!((summary.accuracy - 100.0).abs() < 1e-9);
    }
}
