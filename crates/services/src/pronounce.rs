use std::sync::Mutex;

use engame_core::model::Word;

/// One-way text-to-speech capability.
///
/// Implementations must not fail loudly: when speech is unavailable the call
/// is simply dropped.
pub trait Pronouncer: Send + Sync {
    fn pronounce(&self, word: &Word);
}

/// Used when no speech backend is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPronouncer;

impl Pronouncer for NoopPronouncer {
    fn pronounce(&self, _word: &Word) {}
}

/// Keeps every pronounced word. Handy in tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingPronouncer {
    spoken: Mutex<Vec<Word>>,
}

impl RecordingPronouncer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn spoken(&self) -> Vec<Word> {
        self.spoken
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }
}

impl Pronouncer for RecordingPronouncer {
    fn pronounce(&self, word: &Word) {
        let mut guard = self
            .spoken
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        guard.push(word.clone());
    }
}
