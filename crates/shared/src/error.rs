use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("empty event")]
    Empty,
    #[error("unknown event '{0}' (expected 'tap:<n>' or 'shuffle')")]
    UnknownEvent(String),
    #[error("invalid row number '{0}'")]
    InvalidRowNumber(String),
}
