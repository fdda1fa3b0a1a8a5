use ratehub_core::config::ConfigError;

/// Failures of the tracker client
///
/// Any of these aborts the whole operation in flight; nothing is retried.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The tracker answered with a non-success status
    #[error("GitHub API error ({status}): {message}")]
    Transport { status: u16, message: String },

    /// The request never produced a response
    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },

    /// A `next` link led back to a page already fetched
    #[error("Pagination loop: {url} was already fetched")]
    PaginationLoop { url: String },

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl Error {
    /// Status code of a transport failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}
