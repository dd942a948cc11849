#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Warn,
    Error,
}

/// User visible notice produced by an operation.
///
/// Stored on the session instead of printed, the host decides whether to
/// log it, show it in a status line or assert on it in tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub severity: Severity,
    pub message: String,
}

impl StatusMessage {
    pub fn info(message: impl Into<String>) -> StatusMessage {
        StatusMessage {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn warn(message: impl Into<String>) -> StatusMessage {
        StatusMessage {
            severity: Severity::Warn,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> StatusMessage {
        StatusMessage {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}
