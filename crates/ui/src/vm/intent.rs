use engame_core::model::CategoryName;
use services::{QuizError, QuizSession};
use tracing::warn;

use crate::views::ViewError;

/// Everything a screen can ask the session to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    FinishLoading,
    SubmitName(String),
    PickCategory(CategoryName),
    Answer(String),
    Listen,
    Next,
    Restart,
    Reset,
}

/// Run one intent against the session.
///
/// Stale events (a double click after the screen already moved on) are logged
/// and dropped.
///
/// # Errors
///
/// Returns `ViewError::UnknownCategory` when the picker asks for a category the
/// catalog does not have.
pub fn apply_intent(session: &mut QuizSession, intent: QuizIntent) -> Result<(), ViewError> {
    let result = match intent {
        QuizIntent::FinishLoading => {
            session.finish_loading();
            Ok(())
        }
        QuizIntent::SubmitName(name) => session.submit_name(&name),
        QuizIntent::PickCategory(name) => session.pick_category(&name).map(|_| ()),
        QuizIntent::Answer(option) => session.answer(&option).map(|_| ()),
        QuizIntent::Listen => {
            session.replay_pronunciation();
            Ok(())
        }
        QuizIntent::Next => session.advance().map(|_| ()),
        QuizIntent::Restart => {
            session.restart();
            Ok(())
        }
        QuizIntent::Reset => {
            session.reset();
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(QuizError::UnknownCategory(name)) => Err(ViewError::UnknownCategory(name)),
        Err(err) => {
            warn!(error = %err, "quiz event dropped");
            Ok(())
        }
    }
}
