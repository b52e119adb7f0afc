use thiserror::Error;

/// Errors surfaced at the edges of the engine: configuration, sink setup and
/// thread lifecycle. Protocol invariant violations are not errors; they panic.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {detail}")]
    Io { detail: String },
    #[error("Participant panicked: {role}")]
    ParticipantPanicked { role: String },
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn io(detail: impl Into<String>) -> Self {
        Self::Io {
            detail: detail.into(),
        }
    }

    pub fn participant_panicked(role: impl Into<String>) -> Self {
        Self::ParticipantPanicked { role: role.into() }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::io(err.to_string())
    }
}
