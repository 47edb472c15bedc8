use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{CategoryError, MediaValidationError, SettingsError, TextError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    MediaValidation(#[from] MediaValidationError),
    #[error(transparent)]
    TextValidation(#[from] TextError),
    #[error(transparent)]
    Category(#[from] CategoryError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
