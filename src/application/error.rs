// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

/// Coarse classification surfaced to the user and mapped to exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    NotFound,
    DuplicateId,
    Infrastructure,
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("duplicate id: {0}")]
    DuplicateId(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn duplicate_id(msg: impl Into<String>) -> Self {
        Self::DuplicateId(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::Domain(DomainError::Validation(_)) => {
                ErrorKind::InvalidArgument
            }
            Self::NotFound(_) | Self::Domain(DomainError::NotFound(_)) => ErrorKind::NotFound,
            Self::DuplicateId(_) | Self::Domain(DomainError::DuplicateId(_)) => {
                ErrorKind::DuplicateId
            }
            Self::Infrastructure(_) | Self::Domain(DomainError::Persistence(_)) => {
                ErrorKind::Infrastructure
            }
        }
    }
}
