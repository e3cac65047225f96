use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid epoch: {0}")]
    InvalidEpoch(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
