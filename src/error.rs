//! Error types for the character fetcher.

use thiserror::Error;

/// Errors produced while fetching the character catalog.
///
/// There are exactly two kinds. Anything transport-level (non-success
/// status code, body that is not JSON) is `Network`; a JSON body whose
/// shape lacks the expected `results` list is `Format`. A credential
/// mismatch in the auth stubs is a validation outcome, never an error.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Non-success status code or unparseable body on a page request.
    #[error("network error on page {page}: {message}")]
    Network { page: u32, message: String },

    /// Response parsed as JSON but lacks the expected `results` list.
    #[error("malformed response on page {page}: missing 'results' list")]
    Format { page: u32 },
}

impl FetchError {
    /// The 1-based page index the error occurred on.
    pub fn page(&self) -> u32 {
        match self {
            FetchError::Network { page, .. } | FetchError::Format { page } => *page,
        }
    }
}

pub type FetchResult<T> = Result<T, FetchError>;
