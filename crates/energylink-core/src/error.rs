use thiserror::Error;

/// Failure fetching or decoding a backend response.
///
/// Carries strings rather than transport-specific error types so the core
/// crate stays independent of the HTTP client in use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
