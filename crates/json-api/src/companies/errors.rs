//! Company Errors

use tracing::error;

use companies_app::domain::companies::{CompaniesRepositoryError, CompaniesServiceError};

use crate::errors::ApiError;

/// The operation a handler was attempting, used to word opaque failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CompanyOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl CompanyOperation {
    const fn failure_message(self) -> &'static str {
        match self {
            Self::List => "Failed to retrieve companies",
            Self::Get => "Failed to retrieve company",
            Self::Create => "Failed to create company",
            Self::Update => "Failed to update company",
            Self::Delete => "Failed to delete company",
        }
    }
}

pub(crate) fn into_api_error(error: CompaniesServiceError, operation: CompanyOperation) -> ApiError {
    match error {
        CompaniesServiceError::Validation(rule) => ApiError::bad_request(rule.to_string()),
        CompaniesServiceError::NotFound => ApiError::not_found("Company not found"),
        CompaniesServiceError::Repository(
            CompaniesRepositoryError::InvalidData | CompaniesRepositoryError::MissingRequiredData,
        ) => ApiError::bad_request("Invalid company payload"),
        CompaniesServiceError::Repository(source) => {
            error!(?operation, "{}: {source:?}", operation.failure_message());

            ApiError::internal(operation.failure_message())
        }
        CompaniesServiceError::UnexpectedRowCount(rows) => {
            error!(?operation, rows, "{}", operation.failure_message());

            ApiError::internal(operation.failure_message())
        }
    }
}
