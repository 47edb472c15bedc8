use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::media::ImageRef;
use crate::model::text::Word;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("category name cannot be empty")]
    EmptyName,

    #[error("category {name} has no items")]
    NoItems { name: String },

    #[error("category {name} lists the word {word} more than once")]
    DuplicateWord { name: String, word: String },
}

//
// ─── CATEGORY NAME ─────────────────────────────────────────────────────────────
//

/// Key of a category in the catalog, e.g. `"Animales"`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// # Errors
    ///
    /// Returns `CategoryError::EmptyName` for blank input.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, CategoryError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(CategoryError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryName {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> Self {
        name.0
    }
}

impl FromStr for CategoryName {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CategoryName({:?})", self.0)
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── ITEM ──────────────────────────────────────────────────────────────────────
//

/// A picture/word pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    word: Word,
    image: ImageRef,
}

impl Item {
    #[must_use]
    pub fn new(word: Word, image: ImageRef) -> Self {
        Self { word, image }
    }

    #[must_use]
    pub fn word(&self) -> &Word {
        &self.word
    }

    #[must_use]
    pub fn image(&self) -> &ImageRef {
        &self.image
    }
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// An ordered, immutable list of items under one name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: CategoryName,
    items: Vec<Item>,
}

impl Category {
    /// # Errors
    ///
    /// Returns `CategoryError` when the list is empty or repeats a word.
    pub fn new(name: CategoryName, items: Vec<Item>) -> Result<Self, CategoryError> {
        if items.is_empty() {
            return Err(CategoryError::NoItems {
                name: name.to_string(),
            });
        }

        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.word()) {
                return Err(CategoryError::DuplicateWord {
                    name: name.to_string(),
                    word: item.word().to_string(),
                });
            }
        }

        Ok(Self { name, items })
    }

    #[must_use]
    pub fn name(&self) -> &CategoryName {
        &self.name
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of other words a question in this category can borrow as wrong answers.
    #[must_use]
    pub fn distractor_capacity(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}
