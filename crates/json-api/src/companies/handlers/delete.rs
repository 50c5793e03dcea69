//! Delete Company Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    companies::errors::{CompanyOperation, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

use super::parse_company_id;

/// Delete Company Handler
#[endpoint(
    tags("companies"),
    summary = "Delete Company",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Company deleted"),
    ),
)]
#[tracing::instrument(
    name = "companies.delete",
    skip(id, depot),
    fields(company_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<StatusCode, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let company = parse_company_id(id)?;

    tracing::Span::current().record("company_id", tracing::field::display(company));

    state
        .app
        .companies
        .delete_company(company)
        .await
        .map_err(|error| into_api_error(error, CompanyOperation::Delete))?;

    tracing::info!(company_id = %company, "deleted company");

    Ok(StatusCode::NO_CONTENT)
}
