use thiserror::Error;

/// Coarse classification of a failed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Usage,
    Input,
    Network,
    Protocol,
    Io,
}

/// Errors that abort the authorization-code exchange.
///
/// None of the messages carry access or refresh token values.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Usage error: {0}")]
    Usage(String),
    #[error("Input error: {0}")]
    Input(String),
    #[error("Network error: {message}")]
    Network { status: u16, message: String },
    #[error("Network error: {0}")]
    Transport(String),
    #[error("Protocol error: tokens not found in response: {body}")]
    Protocol { body: String, detail: String },
    #[error("IO error: {0}")]
    Io(String),
}

impl AuthError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage(_) => ErrorKind::Usage,
            Self::Input(_) => ErrorKind::Input,
            Self::Network { .. } | Self::Transport(_) => ErrorKind::Network,
            Self::Protocol { .. } => ErrorKind::Protocol,
            Self::Io(_) => ErrorKind::Io,
        }
    }

    /// HTTP status reported by the token endpoint, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}

impl From<std::io::Error> for AuthError {
    fn from(error: std::io::Error) -> Self {
        Self::Io(error.to_string())
    }
}
