//! Update Company Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, oapi::extract::PathParam, prelude::*};

use crate::{
    companies::{
        errors::{CompanyOperation, into_api_error},
        get::CompanyResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

use super::{create::parse_company_request, parse_company_id};

/// Update Company Handler
///
/// Replaces every field of an existing company. The same rules as creation
/// apply.
#[endpoint(
    tags("companies"),
    summary = "Update Company",
    responses(
        (status_code = StatusCode::OK, description = "Company updated"),
    ),
)]
#[tracing::instrument(
    name = "companies.update",
    skip(id, req, depot, res),
    fields(company_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    id: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CompanyResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let company = parse_company_id(id)?;

    tracing::Span::current().record("company_id", tracing::field::display(company));

    let draft = parse_company_request(req).await?;

    let updated = state
        .app
        .companies
        .update_company(company, draft)
        .await
        .map_err(|error| into_api_error(error, CompanyOperation::Update))?;

    res.add_header(LOCATION, format!("/api/v1/companies/{company}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(company_id = %company, "updated company");

    Ok(Json(updated.into()))
}
