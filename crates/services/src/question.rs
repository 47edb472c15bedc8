use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use std::collections::HashSet;

use engame_core::model::{DEFAULT_OPTION_COUNT, Item, Word};

/// A picture to name plus the words offered as answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    item: Item,
    options: Vec<Word>,
}

impl Question {
    #[must_use]
    pub fn item(&self) -> &Item {
        &self.item
    }

    /// The correct answer.
    #[must_use]
    pub fn word(&self) -> &Word {
        self.item.word()
    }

    /// Answer buttons in display order. Holds the correct word exactly once.
    #[must_use]
    pub fn options(&self) -> &[Word] {
        &self.options
    }

    #[must_use]
    pub fn is_correct(&self, option: &str) -> bool {
        self.item.word() == option
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generated {
    Question(Question),
    /// Every item in the category has already been asked.
    Exhausted,
}

/// Builds multiple-choice questions from a category's items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionGenerator {
    option_count: usize,
}

impl Default for QuestionGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_OPTION_COUNT)
    }
}

impl QuestionGenerator {
    /// `option_count` includes the correct word. Values below 1 are treated as 1.
    #[must_use]
    pub fn new(option_count: usize) -> Self {
        Self {
            option_count: option_count.max(1),
        }
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    /// Pick the next unasked item and shuffle it together with distractors.
    ///
    /// - The question is drawn uniformly from items whose word is not in `used`.
    /// - Distractors are distinct words from the rest of `items`, drawn without
    ///   replacement. Small categories yield fewer options rather than failing.
    /// - Final option order is a Fisher–Yates shuffle over `rng`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        items: &[Item],
        used: &HashSet<Word>,
        rng: &mut R,
    ) -> Generated {
        let remaining: Vec<&Item> = items.iter().filter(|i| !used.contains(i.word())).collect();
        let Some(chosen) = remaining.choose(rng) else {
            return Generated::Exhausted;
        };
        let item = (*chosen).clone();

        let mut pool: Vec<&Word> = items
            .iter()
            .map(Item::word)
            .filter(|w| *w != item.word())
            .collect();
        pool.shuffle(rng);
        pool.truncate(self.option_count - 1);

        let mut options = Vec::with_capacity(pool.len() + 1);
        options.push(item.word().clone());
        options.extend(pool.into_iter().cloned());
        options.shuffle(rng);

        Generated::Question(Question { item, options })
    }
}
