mod category;
pub mod media;
mod settings;
mod text;

pub use category::{Category, CategoryError, CategoryName, Item};
pub use media::{ImageRef, MediaValidationError, placeholder_image_url};
pub use settings::{
    DEFAULT_LOADING_DELAY, DEFAULT_OPTION_COUNT, QuizSettings, QuizSettingsDraft, SettingsError,
    SpeechSettings,
};
pub use text::{PlayerName, TextError, Word};
