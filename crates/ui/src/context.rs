use std::sync::Arc;

use engame_core::Catalog;
use engame_core::model::QuizSettings;
use services::{Pronouncer, QuizSession};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<Catalog>;
    fn settings(&self) -> QuizSettings;
    fn pronouncer(&self) -> Arc<dyn Pronouncer>;

    /// Fixed seed for reproducible question order. `None` seeds from the OS.
    fn seed(&self) -> Option<u64> {
        None
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<Catalog>,
    settings: QuizSettings,
    pronouncer: Arc<dyn Pronouncer>,
    seed: Option<u64>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            settings: app.settings(),
            pronouncer: app.pronouncer(),
            seed: app.seed(),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// Fresh session on the loading screen, wired to this app's speech backend.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        let session = match self.seed {
            Some(seed) => QuizSession::seeded(self.catalog(), self.settings.clone(), seed),
            None => QuizSession::new(self.catalog(), self.settings.clone()),
        };
        session.with_pronouncer(Arc::clone(&self.pronouncer))
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
