#![forbid(unsafe_code)]

pub mod error;
pub mod pronounce;
pub mod question;
pub mod session;

pub use error::QuizError;
pub use pronounce::{NoopPronouncer, Pronouncer, RecordingPronouncer};
pub use question::{Generated, Question, QuestionGenerator};
pub use session::{
    AdvanceOutcome, AnswerFeedback, AnswerOutcome, AnswerRecord, QuizSession, Round, RoundResult,
    Screen, ScreenKind,
};
