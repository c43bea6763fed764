use crate::error::SharedError;

/// Result of a create, update or delete call.
///
/// Callers branch on this instead of inspecting status codes: `Unauthorized`
/// needs a sign-in redirect, everything that is neither a 2xx nor a 401
/// (including transport failures) is an `OtherError`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    Success,
    Unauthorized,
    OtherError(SharedError),
}

impl MutationOutcome {
    /// Maps a response status, with the backend's error message if it sent one
    pub fn from_status(status: u16, message: Option<String>) -> Self {
        match status {
            200..=299 => Self::Success,
            401 => Self::Unauthorized,
            _ => Self::OtherError(SharedError::Http {
                status,
                message: message.unwrap_or_else(|| "Unknown error occurred".to_string()),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<SharedError> for MutationOutcome {
    fn from(error: SharedError) -> Self {
        match error {
            SharedError::Unauthorized => Self::Unauthorized,
            other => Self::OtherError(other),
        }
    }
}
