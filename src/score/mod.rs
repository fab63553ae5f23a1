//! Best-score persistence.
//!
//! The round controller only needs two things from storage: read the best
//! score, and offer a new one. Stores keep the "only if higher" rule, so the
//! stored value never goes down no matter who calls them.

mod file;

pub use file::{load_best, FileScoreStore};

/// Persisted best-score record.
pub trait ScoreStore {
    /// Currently stored best score, 0 if nothing has been stored.
    fn best_score(&self) -> u32;

    /// Store `score` if it is strictly greater than the stored value.
    fn save_if_higher(&mut self, score: u32);
}

impl ScoreStore for Box<dyn ScoreStore> {
    fn best_score(&self) -> u32 {
        (**self).best_score()
    }

    fn save_if_higher(&mut self, score: u32) {
        (**self).save_if_higher(score)
    }
}

/// In-memory store. Forgets everything on exit.
#[derive(Debug, Default, Clone)]
pub struct MemoryScoreStore {
    best: u32,
}

impl MemoryScoreStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an existing record.
    pub fn with_best(best: u32) -> Self {
        Self { best }
    }
}

impl ScoreStore for MemoryScoreStore {
    fn best_score(&self) -> u32 {
        self.best
    }

    fn save_if_higher(&mut self, score: u32) {
        if score > self.best {
            self.best = score;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_zero() {
        assert_eq!(MemoryScoreStore::new().best_score(), 0);
    }

    #[test]
    fn keeps_only_higher_scores() {
        let mut store = MemoryScoreStore::with_best(6);
        store.save_if_higher(4);
        assert_eq!(store.best_score(), 6);
        store.save_if_higher(6);
        assert_eq!(store.best_score(), 6);
        store.save_if_higher(9);
        assert_eq!(store.best_score(), 9);
    }

    #[test]
    fn boxed_store_forwards() {
        let mut store: Box<dyn ScoreStore> = Box::new(MemoryScoreStore::new());
        store.save_if_higher(3);
        assert_eq!(store.best_score(), 3);
    }
}
