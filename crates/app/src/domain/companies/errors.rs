//! Companies errors.

use std::num::TryFromIntError;

use sqlx::{
    Error,
    error::{BoxDynError, DatabaseError, ErrorKind},
};
use thiserror::Error;

/// Business rule violations, reported before storage is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("company name is required")]
    NameRequired,

    #[error("company name cannot exceed 255 characters")]
    NameTooLong,

    #[error("company address is required")]
    AddressRequired,

    #[error("invalid jurisdiction: must be one of [UK Singapore Caymens]")]
    InvalidJurisdiction,

    #[error("number of directors must be between 1 and 100")]
    DirectorsOutOfRange,

    #[error("number of shareholders must be between 1 and 1000")]
    ShareholdersOutOfRange,

    #[error("limit must be between 1 and 100")]
    LimitOutOfRange,

    #[error("offset must be non-negative")]
    NegativeOffset,
}

#[derive(Debug, Error)]
pub enum CompaniesRepositoryError {
    #[error("company already exists")]
    AlreadyExists,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("stored value in column `{column}` could not be decoded")]
    InvalidRecord {
        column: String,
        #[source]
        source: BoxDynError,
    },

    #[error("integer value out of range")]
    IntegerOutOfRange(#[from] TryFromIntError),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CompaniesRepositoryError {
    fn from(error: Error) -> Self {
        if let Error::ColumnDecode { index, source } = error {
            return Self::InvalidRecord {
                column: index,
                source,
            };
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompaniesServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("company not found")]
    NotFound,

    #[error("delete affected {0} rows, expected exactly one")]
    UnexpectedRowCount(u64),

    #[error("storage failure")]
    Repository(#[from] CompaniesRepositoryError),
}
