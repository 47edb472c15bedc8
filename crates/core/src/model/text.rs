use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TextError {
    #[error("word cannot be empty")]
    EmptyWord,

    #[error("player name cannot be empty")]
    EmptyPlayerName,
}

//
// ─── WORD ──────────────────────────────────────────────────────────────────────
//

/// The answer text of a quiz item.
///
/// Always trimmed and non-empty. Comparisons are exact, so `"Cat"` and
/// `"cat"` are different words.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Parses a word, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `TextError::EmptyWord` if nothing is left after trimming.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::EmptyWord);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Word {
    type Error = TextError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.0)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── PLAYER NAME ───────────────────────────────────────────────────────────────
//

/// Name typed on the welcome screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerName(String);

impl PlayerName {
    /// # Errors
    ///
    /// Returns `TextError::EmptyPlayerName` for blank input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::EmptyPlayerName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
