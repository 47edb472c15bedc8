mod categories;
mod finished;
mod loading;
mod playing;
mod quiz;
mod state;
mod welcome;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use categories::CategoryPickerView;
pub use finished::FinishedView;
pub use loading::LoadingView;
pub use playing::PlayingView;
pub use quiz::QuizView;
pub use state::ViewError;
pub use welcome::WelcomeView;
