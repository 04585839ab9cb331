//! API Errors

/// Failure of a catalog request
#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Network unreachable, CORS, aborted fetch
    Transport(String),
    /// Server answered with a non-2xx status
    Status(u16),
    /// Body was not the expected JSON
    Decode(String),
}

impl ApiError {
    /// The server was reached and refused the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Status(_))
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Transport error: {}", msg),
            ApiError::Status(code) => write!(f, "Server returned status {}", code),
            ApiError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::Status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}
