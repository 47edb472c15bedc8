use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_secs(4);
pub const DEFAULT_OPTION_COUNT: usize = 4;
pub const DEFAULT_SPEECH_LANG: &str = "en-US";
pub const DEFAULT_SPEECH_RATE: f32 = 0.9;
pub const DEFAULT_IMAGES_BASE: &str = "/images/";

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("a question needs at least 2 options, got {0}")]
    InvalidOptionCount(usize),

    #[error("speech rate must be in (0, 10], got {0}")]
    InvalidSpeechRate(f32),

    #[error("speech language cannot be empty")]
    EmptySpeechLang,
}

/// Voice parameters handed to the pronunciation backend.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeechSettings {
    lang: String,
    rate: f32,
}

impl SpeechSettings {
    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }

    #[must_use]
    pub fn rate(&self) -> f32 {
        self.rate
    }
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            lang: DEFAULT_SPEECH_LANG.to_string(),
            rate: DEFAULT_SPEECH_RATE,
        }
    }
}

/// Validated quiz configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct QuizSettings {
    loading_delay: Duration,
    option_count: usize,
    speech: SpeechSettings,
    images_base: String,
}

/// Unvalidated settings as collected from flags and environment.
#[derive(Clone, Debug, Default)]
pub struct QuizSettingsDraft {
    pub loading_delay: Option<Duration>,
    pub option_count: Option<usize>,
    pub speech_lang: Option<String>,
    pub speech_rate: Option<f32>,
    pub images_base: Option<String>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the draft, filling gaps with defaults.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if the option count, speech rate or language is out of range.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let option_count = self.option_count.unwrap_or(DEFAULT_OPTION_COUNT);
        if option_count < 2 {
            return Err(SettingsError::InvalidOptionCount(option_count));
        }

        let rate = self.speech_rate.unwrap_or(DEFAULT_SPEECH_RATE);
        if !(rate > 0.0 && rate <= 10.0) {
            return Err(SettingsError::InvalidSpeechRate(rate));
        }

        // A blank language given explicitly is rejected, never defaulted.
        let lang = match self.speech_lang {
            Some(raw) => normalize_optional(Some(raw)).ok_or(SettingsError::EmptySpeechLang)?,
            None => DEFAULT_SPEECH_LANG.to_string(),
        };

        let images_base =
            normalize_optional(self.images_base).unwrap_or_else(|| DEFAULT_IMAGES_BASE.to_string());

        Ok(QuizSettings {
            loading_delay: self.loading_delay.unwrap_or(DEFAULT_LOADING_DELAY),
            option_count,
            speech: SpeechSettings { lang, rate },
            images_base,
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn loading_delay(&self) -> Duration {
        self.loading_delay
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.option_count
    }

    #[must_use]
    pub fn speech(&self) -> &SpeechSettings {
        &self.speech
    }

    #[must_use]
    pub fn images_base(&self) -> &str {
        &self.images_base
    }
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            loading_delay: DEFAULT_LOADING_DELAY,
            option_count: DEFAULT_OPTION_COUNT,
            speech: SpeechSettings::default(),
            images_base: DEFAULT_IMAGES_BASE.to_string(),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
