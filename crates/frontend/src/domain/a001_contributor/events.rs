use super::api::FetchError;

/// Failure reported by the contributors table to its parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEvent {
    /// HTTP status, 0 when the request never got one
    pub code: u16,
    pub message: String,
}

impl ErrorEvent {
    pub fn new(code: u16, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code == 404
    }
}

impl From<&FetchError> for ErrorEvent {
    fn from(err: &FetchError) -> Self {
        Self::new(err.code(), err.message())
    }
}

