//! Company Handlers

use salvo::oapi::extract::PathParam;

use companies_app::domain::companies::records::CompanyUuid;

use crate::errors::ApiError;

pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod update;

fn parse_company_id(id: PathParam<String>) -> Result<CompanyUuid, ApiError> {
    id.into_inner()
        .parse()
        .map_err(|_ignored| ApiError::bad_request("Invalid company ID format"))
}
