use thiserror::Error;

/// Errors returned by [`TutorClient`](super::client::TutorClient) calls.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport failure, timeout, or an undecodable body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server rejected the credentials or the bearer token (401).
    #[error("unauthorized")]
    Unauthorized,

    /// Server answered with a non-success status other than 401.
    #[error("server error: {status} - {message}")]
    Status { status: u16, message: String },
}

impl ApiError {
    /// HTTP status carried by this error, if the request reached the server.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http(e) => e.status().map(|s| s.as_u16()),
            ApiError::Unauthorized => Some(401),
            ApiError::Status { status, .. } => Some(*status),
        }
    }
}
