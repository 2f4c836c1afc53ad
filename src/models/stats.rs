//! Judgement tiers and per-session hit statistics.

/// Accuracy classification for a single note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Judgement {
    Perfect,
    Good,
    Bad,
    Miss,
}

impl Judgement {
    /// Fixed point value awarded for this tier.
    pub fn points(self) -> u32 {
        match self {
            Judgement::Perfect => 25,
            Judgement::Good => 15,
            Judgement::Bad => 5,
            Judgement::Miss => 0,
        }
    }
}

impl std::fmt::Display for Judgement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Judgement::Perfect => write!(f, "PERFECT"),
            Judgement::Good => write!(f, "GOOD"),
            Judgement::Bad => write!(f, "BAD"),
            Judgement::Miss => write!(f, "MISS"),
        }
    }
}

/// Per-tier hit counters, owned by the session layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitStats {
    pub perfect: u32,
    pub good: u32,
    pub bad: u32,
    pub miss: u32,
}

impl HitStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the counter for the given tier.
    pub fn record(&mut self, judgement: Judgement) {
        match judgement {
            Judgement::Perfect => self.perfect += 1,
            Judgement::Good => self.good += 1,
            Judgement::Bad => self.bad += 1,
            Judgement::Miss => self.miss += 1,
        }
    }

    /// Total number of judged notes.
    pub fn total(&self) -> u32 {
        self.perfect + self.good + self.bad + self.miss
    }

    /// Calculates accuracy percentage (0-100).
    ///
    /// Each note is weighted by its point value relative to a perfect hit,
    /// so accuracy and score stay consistent with each other.
    pub fn calculate_accuracy(&self) -> f64 {
        let total = self.total() as f64;
        if total == 0.0 {
            return 0.0;
        }

        let score = self.perfect as f64 * Judgement::Perfect.points() as f64
            + self.good as f64 * Judgement::Good.points() as f64
            + self.bad as f64 * Judgement::Bad.points() as f64;

        (score / (total * Judgement::Perfect.points() as f64)) * 100.0
    }
}
