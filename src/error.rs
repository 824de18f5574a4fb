use reqwest::StatusCode;

/// Why a probe failed.
///
/// Both variants map to the same exit code; the distinction only shows up in
/// the log line emitted before exit.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status: {status}")]
    UnexpectedStatus { status: StatusCode },
}

impl ProbeError {
    /// Status code of the response, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProbeError::Transport(e) => e.status(),
            ProbeError::UnexpectedStatus { status } => Some(*status),
        }
    }
}
