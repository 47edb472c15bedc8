//! Static category data the quiz draws from.
//!
//! The catalog is loaded once at startup and never mutated afterwards. A
//! default data set is compiled into the binary; a JSON file with the same
//! shape can replace it.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{Category, CategoryError, CategoryName, Item};

const BUILTIN_CATALOG: &str = include_str!("../data/categories.json");

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog has no categories")]
    Empty,
    #[error("category {0} is defined more than once")]
    DuplicateCategory(String),
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Category(#[from] CategoryError),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    name: CategoryName,
    items: Vec<Item>,
}

/// Ordered set of categories. Order is the order shown in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// # Errors
    ///
    /// Returns `CatalogError` if the list is empty or names repeat.
    pub fn new(categories: Vec<Category>) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(categories.len());
        for category in &categories {
            if !seen.insert(category.name()) {
                return Err(CatalogError::DuplicateCategory(category.name().to_string()));
            }
        }

        Ok(Self { categories })
    }

    /// The data set shipped with the app.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` only if the embedded JSON is broken.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_CATALOG)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed input and validation errors otherwise.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        let categories = file
            .categories
            .into_iter()
            .map(|record| Category::new(record.name, record.items))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(categories)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    #[must_use]
    pub fn get(&self, name: &CategoryName) -> Option<&Category> {
        self.categories.iter().find(|c| c.name() == name)
    }

    #[must_use]
    pub fn contains(&self, name: &CategoryName) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &CategoryName> {
        self.categories.iter().map(Category::name)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
