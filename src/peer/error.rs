//! Error types for calls to the user service.

use crate::context::Interrupted;

/// Failure of a single user lookup against the user service.
///
/// Only [`PeerError::UserNotFound`] means the user is known to be absent;
/// every other variant means the answer could not be determined.
#[derive(Debug, thiserror::Error)]
pub enum PeerError {
    /// The user service answered 404.
    #[error("user not found")]
    UserNotFound,
    /// The user service answered with a status other than 200 or 404.
    #[error("user service returned status: {0}")]
    UnexpectedStatus(u16),
    /// The request never produced a response (refused, DNS, timeout, cancelled).
    #[error("failed to connect to user service: {0}")]
    Connection(String),
    /// A 200 response whose body is not a user.
    #[error("failed to decode user: {0}")]
    Decode(String),
}

impl PeerError {
    /// Whether the user service reported the user as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PeerError::UserNotFound)
    }
}

impl From<reqwest::Error> for PeerError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PeerError::Decode(err.to_string())
        } else {
            PeerError::Connection(err.to_string())
        }
    }
}

impl From<Interrupted> for PeerError {
    fn from(err: Interrupted) -> Self {
        PeerError::Connection(err.to_string())
    }
}
