//! Type definitions for image localization

use std::collections::HashMap;

/// Error raised while localizing a single image
///
/// These never reach the Markdown output: the localizer logs them and keeps
/// the original reference.
#[derive(Debug, thiserror::Error)]
pub enum LocalizeError {
    /// Reference or base URL could not be parsed
    #[error("Invalid image URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Server answered with a non-success status
    #[error("Image download failed with status {status}: {url}")]
    HttpStatus { url: String, status: u16 },

    /// Connection, timeout or body read failure
    #[error("Image request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Directory creation or file write failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// How a single image reference was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Localized {
    /// Relative reference without a base URL; kept as-is
    Unresolvable,
    /// File already present in the images directory; no network access
    Cached(String),
    /// File fetched during this call
    Downloaded(String),
}

impl Localized {
    /// Relative path of the local file, if there is one
    #[must_use]
    pub fn local_path(&self) -> Option<&str> {
        match self {
            Self::Unresolvable => None,
            Self::Cached(path) | Self::Downloaded(path) => Some(path),
        }
    }
}

/// Failure record for one image reference
#[derive(Debug, Clone)]
pub struct ImageFailure {
    pub reference: String,
    pub error: String,
}

/// Outcome of localizing every image reference in a document
///
/// `paths` maps each original `src` value to the Markdown link target that
/// replaces it. Failed or unresolvable references map to themselves.
#[derive(Debug, Clone, Default)]
pub struct LocalizedImages {
    pub(crate) paths: HashMap<String, String>,
    pub downloaded: usize,
    pub cached: usize,
    pub failures: Vec<ImageFailure>,
}

impl LocalizedImages {
    /// Link target for an original `src` value
    #[must_use]
    pub fn path_for(&self, reference: &str) -> Option<&str> {
        self.paths.get(reference).map(String::as_str)
    }

    /// Number of distinct references processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.paths.len()
    }

    /// Check if any download failed
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
