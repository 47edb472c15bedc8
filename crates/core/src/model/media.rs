use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::model::text::Word;

//
// ─── ERRORS (domain validation) ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MediaValidationError {
    #[error("Image reference cannot be empty.")]
    EmptyImageRef,

    #[error("Image URL is not valid: {0}")]
    InvalidUrl(String),
}

/// Base used when a placeholder has to stand in for a missing picture.
pub const PLACEHOLDER_BASE_URL: &str = "https://placehold.co/220x220/5c6bc0/ffffff";

//
// ─── IMAGE REFERENCE ───────────────────────────────────────────────────────────
//

/// Where the picture for an item lives.
///
/// Plain names (`"cat.png"`) are looked up under the configured images
/// directory. Anything with an `http`/`https` scheme is used as-is.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ImageRef {
    File(String),
    Url(Url),
}

impl ImageRef {
    /// # Errors
    ///
    /// Returns `MediaValidationError` for empty input or a malformed URL.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, MediaValidationError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(MediaValidationError::EmptyImageRef);
        }
        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|_| MediaValidationError::InvalidUrl(s.to_string()))?;
            return Ok(ImageRef::Url(url));
        }
        Ok(ImageRef::File(s.trim_start_matches('/').to_string()))
    }

    /// Resolves the reference into something an `<img src>` can load.
    #[must_use]
    pub fn resolve(&self, images_base: &str) -> String {
        match self {
            ImageRef::File(name) => {
                if images_base.ends_with('/') {
                    format!("{images_base}{name}")
                } else {
                    format!("{images_base}/{name}")
                }
            }
            ImageRef::Url(url) => url.to_string(),
        }
    }

    #[must_use]
    pub fn as_file(&self) -> Option<&str> {
        match self {
            ImageRef::File(name) => Some(name),
            ImageRef::Url(_) => None,
        }
    }

    #[must_use]
    pub fn as_url(&self) -> Option<&Url> {
        match self {
            ImageRef::Url(url) => Some(url),
            ImageRef::File(_) => None,
        }
    }
}

impl TryFrom<String> for ImageRef {
    type Error = MediaValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<ImageRef> for String {
    fn from(image: ImageRef) -> Self {
        match image {
            ImageRef::File(name) => name,
            ImageRef::Url(url) => url.into(),
        }
    }
}

impl fmt::Debug for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::File(name) => write!(f, "ImageRef::File({name:?})"),
            ImageRef::Url(url) => write!(f, "ImageRef::Url({:?})", url.as_str()),
        }
    }
}

/// Text-only picture shown when the real image fails to load.
#[must_use]
pub fn placeholder_image_url(word: &Word) -> String {
    match Url::parse(PLACEHOLDER_BASE_URL) {
        Ok(mut url) => {
            url.query_pairs_mut().append_pair("text", word.as_str());
            url.into()
        }
        Err(_) => PLACEHOLDER_BASE_URL.to_string(),
    }
}
