use thiserror::Error;

/// Failures turning user input into report vocabulary. Dialog operations
/// themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown report target kind '{0}' (expected 'post' or 'comment')")]
    UnknownTargetKind(String),
    #[error("report target id must not be empty")]
    EmptyTargetId,
    #[error("unknown report reason '{0}'")]
    UnknownReason(String),
}
