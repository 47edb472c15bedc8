//! Shared error types for the services crate.

use thiserror::Error;

use engame_core::model::TextError;

use crate::session::ScreenKind;

/// Errors emitted by `QuizSession` transitions.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("invalid player name: {0}")]
    InvalidName(#[from] TextError),
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("cannot {action} while on the {screen} screen")]
    UnexpectedScreen {
        action: &'static str,
        screen: ScreenKind,
    },
    #[error("the current question has not been answered yet")]
    NotAnswered,
}
