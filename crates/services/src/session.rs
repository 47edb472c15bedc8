use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

use engame_core::Catalog;
use engame_core::model::{CategoryName, Item, PlayerName, QuizSettings, Word};

use crate::error::QuizError;
use crate::pronounce::{NoopPronouncer, Pronouncer};
use crate::question::{Generated, Question, QuestionGenerator};

//
// ─── SCREENS ───────────────────────────────────────────────────────────────────
//

/// Discriminant of [`Screen`], cheap to copy around for logging and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScreenKind {
    Loading,
    Welcome,
    CategoryPicker,
    Playing,
    Finished,
}

impl fmt::Display for ScreenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ScreenKind::Loading => "loading",
            ScreenKind::Welcome => "welcome",
            ScreenKind::CategoryPicker => "category picker",
            ScreenKind::Playing => "playing",
            ScreenKind::Finished => "finished",
        };
        f.write_str(label)
    }
}

/// Where the player currently is. Each variant carries exactly the data that
/// screen needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Welcome,
    CategoryPicker { player: PlayerName },
    Playing { player: PlayerName, round: Round },
    Finished { player: PlayerName, result: RoundResult },
}

impl Screen {
    #[must_use]
    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::Loading => ScreenKind::Loading,
            Screen::Welcome => ScreenKind::Welcome,
            Screen::CategoryPicker { .. } => ScreenKind::CategoryPicker,
            Screen::Playing { .. } => ScreenKind::Playing,
            Screen::Finished { .. } => ScreenKind::Finished,
        }
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlayerName> {
        match self {
            Screen::Loading | Screen::Welcome => None,
            Screen::CategoryPicker { player }
            | Screen::Playing { player, .. }
            | Screen::Finished { player, .. } => Some(player),
        }
    }
}

//
// ─── ROUND ─────────────────────────────────────────────────────────────────────
//

/// What the player picked for the current question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerRecord {
    selected: String,
    correct: bool,
}

impl AnswerRecord {
    #[must_use]
    pub fn selected(&self) -> &str {
        &self.selected
    }

    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.correct
    }
}

/// A pass through one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Round {
    category: CategoryName,
    items: Vec<Item>,
    used_words: HashSet<Word>,
    question: Question,
    answer: Option<AnswerRecord>,
    score: u32,
}

impl Round {
    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn used_words(&self) -> &HashSet<Word> {
        &self.used_words
    }

    #[must_use]
    pub fn question(&self) -> &Question {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> Option<&AnswerRecord> {
        self.answer.as_ref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Items not asked yet, including the one on screen if it is still unanswered.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.items.len().saturating_sub(self.used_words.len())
    }

    fn into_result(self) -> RoundResult {
        RoundResult {
            category: self.category,
            score: self.score,
            total: self.items.len(),
            used_words: self.used_words,
        }
    }
}

/// Final tally of a completed round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundResult {
    category: CategoryName,
    score: u32,
    total: usize,
    used_words: HashSet<Word>,
}

impl RoundResult {
    #[must_use]
    pub fn category(&self) -> &CategoryName {
        &self.category
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn used_words(&self) -> &HashSet<Word> {
        &self.used_words
    }
}

//
// ─── TRANSITION OUTCOMES ───────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub selected: String,
    pub correct_word: Word,
    pub score: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnswerOutcome {
    Recorded(AnswerFeedback),
    /// The question was already answered; nothing changed.
    Ignored,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    NextQuestion,
    Finished { score: u32, total: usize },
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz state machine.
///
/// `Loading → Welcome → CategoryPicker → Playing → Finished`, with `restart`
/// going back to the category picker and `reset` back to the welcome screen.
/// Every transition runs synchronously to completion.
pub struct QuizSession<R = StdRng> {
    screen: Screen,
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    generator: QuestionGenerator,
    pronouncer: Arc<dyn Pronouncer>,
    rng: R,
}

impl QuizSession<StdRng> {
    /// Session with an OS-seeded generator and no speech.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, settings: QuizSettings) -> Self {
        Self::with_rng(catalog, settings, StdRng::from_rng(&mut rand::rng()))
    }

    /// Session whose question order is fully determined by `seed`.
    #[must_use]
    pub fn seeded(catalog: Arc<Catalog>, settings: QuizSettings, seed: u64) -> Self {
        Self::with_rng(catalog, settings, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> QuizSession<R> {
    #[must_use]
    pub fn with_rng(catalog: Arc<Catalog>, settings: QuizSettings, rng: R) -> Self {
        Self {
            screen: Screen::Loading,
            catalog,
            generator: QuestionGenerator::new(settings.option_count()),
            settings,
            pronouncer: Arc::new(NoopPronouncer),
            rng,
        }
    }

    #[must_use]
    pub fn with_pronouncer(mut self, pronouncer: Arc<dyn Pronouncer>) -> Self {
        self.pronouncer = pronouncer;
        self
    }

    #[must_use]
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    #[must_use]
    pub fn player(&self) -> Option<&PlayerName> {
        self.screen.player()
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        match &self.screen {
            Screen::Playing { round, .. } => Some(round),
            _ => None,
        }
    }

    #[must_use]
    pub fn result(&self) -> Option<&RoundResult> {
        match &self.screen {
            Screen::Finished { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Score of the round in progress or just completed; zero otherwise.
    #[must_use]
    pub fn score(&self) -> u32 {
        match &self.screen {
            Screen::Playing { round, .. } => round.score,
            Screen::Finished { result, .. } => result.score,
            _ => 0,
        }
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.round().is_some_and(Round::is_answered)
    }

    /// Leave the splash screen. Has no effect anywhere else.
    pub fn finish_loading(&mut self) {
        if matches!(self.screen, Screen::Loading) {
            debug!("loading finished");
            self.screen = Screen::Welcome;
        }
    }

    /// Store the player's name and show the categories.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidName` for a blank name and
    /// `QuizError::UnexpectedScreen` outside the welcome screen.
    pub fn submit_name(&mut self, raw: &str) -> Result<(), QuizError> {
        self.expect_screen(ScreenKind::Welcome, "submit a name")?;
        let player = PlayerName::parse(raw)?;
        debug!(player = %player, "name submitted");
        self.screen = Screen::CategoryPicker { player };
        Ok(())
    }

    /// Start a round over every item of `name`.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnknownCategory` if the catalog has no such category and
    /// `QuizError::UnexpectedScreen` outside the category picker.
    pub fn pick_category(&mut self, name: &CategoryName) -> Result<ScreenKind, QuizError> {
        self.expect_screen(ScreenKind::CategoryPicker, "pick a category")?;
        let Some(category) = self.catalog.get(name) else {
            warn!(category = %name, "unknown category requested");
            return Err(QuizError::UnknownCategory(name.to_string()));
        };

        let items = category.items().to_vec();
        let used_words = HashSet::new();
        let generated = self.generator.generate(&items, &used_words, &mut self.rng);
        info!(category = %name, items = items.len(), "round started");

        self.screen = match std::mem::replace(&mut self.screen, Screen::Loading) {
            Screen::CategoryPicker { player } => match generated {
                Generated::Question(question) => Screen::Playing {
                    player,
                    round: Round {
                        category: name.clone(),
                        items,
                        used_words,
                        question,
                        answer: None,
                        score: 0,
                    },
                },
                Generated::Exhausted => Screen::Finished {
                    player,
                    result: RoundResult {
                        category: name.clone(),
                        score: 0,
                        total: items.len(),
                        used_words,
                    },
                },
            },
            other => other,
        };
        Ok(self.screen.kind())
    }

    /// Grade `option` against the current question.
    ///
    /// The correct word is marked as used and pronounced whether or not the
    /// pick was right. A second answer to the same question is ignored.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::UnexpectedScreen` when no round is in progress.
    pub fn answer(&mut self, option: &str) -> Result<AnswerOutcome, QuizError> {
        let screen = self.screen.kind();
        let Screen::Playing { round, .. } = &mut self.screen else {
            return Err(QuizError::UnexpectedScreen {
                action: "answer",
                screen,
            });
        };

        if round.answer.is_some() {
            debug!(option, "question already answered; ignoring");
            return Ok(AnswerOutcome::Ignored);
        }

        let correct = round.question.is_correct(option);
        if correct {
            round.score += 1;
        }
        let correct_word = round.question.word().clone();
        round.used_words.insert(correct_word.clone());
        round.answer = Some(AnswerRecord {
            selected: option.to_string(),
            correct,
        });
        debug!(
            option,
            expected = %correct_word,
            correct,
            score = round.score,
            "answer recorded"
        );

        let feedback = AnswerFeedback {
            correct,
            selected: option.to_string(),
            correct_word,
            score: round.score,
        };
        self.pronouncer.pronounce(&feedback.correct_word);
        Ok(AnswerOutcome::Recorded(feedback))
    }

    /// Say the revealed answer again. Returns whether anything was pronounced.
    pub fn replay_pronunciation(&self) -> bool {
        match self.round() {
            Some(round) if round.is_answered() => {
                self.pronouncer.pronounce(round.question.word());
                true
            }
            _ => false,
        }
    }

    /// Move past an answered question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NotAnswered` if the current question is still open and
    /// `QuizError::UnexpectedScreen` when no round is in progress.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, QuizError> {
        let screen = self.screen.kind();
        let Screen::Playing { round, .. } = &mut self.screen else {
            return Err(QuizError::UnexpectedScreen {
                action: "advance",
                screen,
            });
        };

        if round.answer.is_none() {
            return Err(QuizError::NotAnswered);
        }

        match self
            .generator
            .generate(&round.items, &round.used_words, &mut self.rng)
        {
            Generated::Question(question) => {
                round.question = question;
                round.answer = None;
                debug!(remaining = round.remaining(), "next question");
                return Ok(AdvanceOutcome::NextQuestion);
            }
            Generated::Exhausted => {}
        }

        self.screen = match std::mem::replace(&mut self.screen, Screen::Loading) {
            Screen::Playing { player, round } => Screen::Finished {
                player,
                result: round.into_result(),
            },
            other => other,
        };
        let (score, total) = self
            .result()
            .map_or((0, 0), |result| (result.score, result.total));
        info!(score, total, "round finished");
        Ok(AdvanceOutcome::Finished { score, total })
    }

    /// Drop the current round and go back to the category picker.
    pub fn restart(&mut self) {
        self.screen = match std::mem::replace(&mut self.screen, Screen::Loading) {
            Screen::Playing { player, round } => {
                debug!(category = %round.category, "round abandoned");
                Screen::CategoryPicker { player }
            }
            Screen::Finished { player, .. } => Screen::CategoryPicker { player },
            other @ Screen::CategoryPicker { .. } => other,
            other => {
                warn!(screen = %other.kind(), "restart ignored");
                other
            }
        };
    }

    /// Forget the player and go back to the welcome screen.
    pub fn reset(&mut self) {
        match self.screen.kind() {
            ScreenKind::Loading => warn!("reset ignored while loading"),
            ScreenKind::Welcome => {}
            kind => {
                debug!(from = %kind, "full reset");
                self.screen = Screen::Welcome;
            }
        }
    }

    fn expect_screen(&self, expected: ScreenKind, action: &'static str) -> Result<(), QuizError> {
        let screen = self.screen.kind();
        if screen == expected {
            Ok(())
        } else {
            warn!(%screen, action, "transition rejected");
            Err(QuizError::UnexpectedScreen { action, screen })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engame_core::model::{Category, ImageRef};

    fn catalog() -> Arc<Catalog> {
        let items = ["cat", "dog", "fish", "bird", "cow"]
            .iter()
            .map(|w| {
                Item::new(
                    Word::parse(w).unwrap(),
                    ImageRef::parse(format!("{w}.png")).unwrap(),
                )
            })
            .collect();
        let category = Category::new(CategoryName::parse("Animales").unwrap(), items).unwrap();
        Arc::new(Catalog::new(vec![category]).unwrap())
    }

    fn playing_session() -> QuizSession {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 11);
        session.finish_loading();
        session.submit_name("Ana").unwrap();
        session
            .pick_category(&CategoryName::parse("Animales").unwrap())
            .unwrap();
        session
    }

    #[test]
    fn starts_loading_then_welcome() {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 1);
        assert_eq!(session.screen().kind(), ScreenKind::Loading);
        session.finish_loading();
        assert_eq!(session.screen().kind(), ScreenKind::Welcome);
        session.finish_loading();
        assert_eq!(session.screen().kind(), ScreenKind::Welcome);
    }

    #[test]
    fn blank_name_keeps_welcome_screen() {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 1);
        session.finish_loading();
        assert!(matches!(
            session.submit_name("   "),
            Err(QuizError::InvalidName(_))
        ));
        assert_eq!(session.screen(), &Screen::Welcome);
    }

    #[test]
    fn name_is_stored_trimmed() {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 1);
        session.finish_loading();
        session.submit_name("  Ana  ").unwrap();
        assert_eq!(session.player().map(PlayerName::as_str), Some("Ana"));
        assert_eq!(session.screen().kind(), ScreenKind::CategoryPicker);
    }

    #[test]
    fn name_cannot_be_submitted_while_loading() {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 1);
        assert!(matches!(
            session.submit_name("Ana"),
            Err(QuizError::UnexpectedScreen {
                screen: ScreenKind::Loading,
                ..
            })
        ));
    }

    #[test]
    fn unknown_category_leaves_picker_untouched() {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 1);
        session.finish_loading();
        session.submit_name("Ana").unwrap();
        let err = session
            .pick_category(&CategoryName::parse("Planetas").unwrap())
            .unwrap_err();
        assert!(matches!(err, QuizError::UnknownCategory(name) if name == "Planetas"));
        assert_eq!(session.screen().kind(), ScreenKind::CategoryPicker);
    }

    #[test]
    fn advance_requires_an_answer() {
        let mut session = playing_session();
        assert!(matches!(session.advance(), Err(QuizError::NotAnswered)));
    }

    #[test]
    fn answer_outside_a_round_is_rejected() {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 1);
        session.finish_loading();
        assert!(matches!(
            session.answer("cat"),
            Err(QuizError::UnexpectedScreen {
                action: "answer",
                screen: ScreenKind::Welcome,
            })
        ));
    }

    #[test]
    fn wrong_answer_keeps_score_and_reveals_word() {
        let mut session = playing_session();
        let expected = session.round().unwrap().question().word().clone();

        let outcome = session.answer("definitely-not-a-word").unwrap();
        let AnswerOutcome::Recorded(feedback) = outcome else {
            panic!("first answer must be recorded");
        };
        assert!(!feedback.correct);
        assert_eq!(feedback.correct_word, expected);
        assert_eq!(feedback.score, 0);
        assert_eq!(session.score(), 0);

        let round = session.round().unwrap();
        assert!(round.used_words().contains(&expected));
        assert_eq!(round.answer().unwrap().selected(), "definitely-not-a-word");
        assert!(!round.answer().unwrap().is_correct());
    }

    #[test]
    fn replay_only_after_answering() {
        let mut session = playing_session();
        assert!(!session.replay_pronunciation());
        let word = session.round().unwrap().question().word().to_string();
        session.answer(&word).unwrap();
        assert!(session.replay_pronunciation());
    }

    #[test]
    fn restart_keeps_player_and_drops_round() {
        let mut session = playing_session();
        session.restart();
        assert_eq!(
            session.screen(),
            &Screen::CategoryPicker {
                player: PlayerName::parse("Ana").unwrap()
            }
        );
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn reset_forgets_player() {
        let mut session = playing_session();
        session.reset();
        assert_eq!(session.screen(), &Screen::Welcome);
        assert!(session.player().is_none());
    }

    #[test]
    fn restart_and_reset_are_ignored_while_loading() {
        let mut session = QuizSession::seeded(catalog(), QuizSettings::default(), 1);
        session.restart();
        session.reset();
        assert_eq!(session.screen(), &Screen::Loading);
    }
}
