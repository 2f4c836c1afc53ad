//! Definitions and constructors for hit window distance thresholds.

use crate::models::stats::Judgement;
use serde::{Deserialize, Serialize};

/// Tolerance windows measured as absolute distance (units) from the
/// target line. Ordered `perfect < good < bad`; classification is
/// inclusive of each boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HitWindow {
    pub perfect: f32,
    pub good: f32,
    pub bad: f32,
    /// Small extension past the bad window for keypress eligibility, so
    /// a slightly late press still finds the note before the sweeper
    /// removes it.
    pub slack: f32,
}

impl HitWindow {
    /// Default windows tuned for a 200 units/s note speed.
    pub fn new() -> Self {
        Self {
            perfect: 10.0,
            good: 25.0,
            bad: 40.0,
            slack: 20.0,
        }
    }

    /// Whether the thresholds are usable: tiers strictly widening and a
    /// non-negative slack.
    pub fn is_valid(&self) -> bool {
        self.perfect >= 0.0
            && self.perfect < self.good
            && self.good < self.bad
            && self.slack >= 0.0
    }

    /// Whether a note at this distance can be matched by a keypress at
    /// all. Strictly wider than the bad window by `slack`.
    pub fn is_eligible(&self, distance: f32) -> bool {
        distance < self.bad + self.slack
    }

    /// Classifies a hit by distance from the target line.
    ///
    /// Returns `None` beyond the bad window: a press that far out never
    /// produces a miss - misses only originate from the sweeper.
    pub fn judge(&self, distance: f32) -> Option<Judgement> {
        if distance <= self.perfect {
            Some(Judgement::Perfect)
        } else if distance <= self.good {
            Some(Judgement::Good)
        } else if distance <= self.bad {
            Some(Judgement::Bad)
        } else {
            None
        }
    }
}

impl Default for HitWindow {
    fn default() -> Self {
        Self::new()
    }
}
