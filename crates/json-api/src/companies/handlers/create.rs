//! Create Company Handler

use std::sync::Arc;

use salvo::{http::header::LOCATION, prelude::*};
use serde::Deserialize;

use companies_app::domain::companies::data::CompanyDraft;

use crate::{
    companies::{
        errors::{CompanyOperation, into_api_error},
        get::CompanyResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Company fields accepted by create and update.
///
/// Missing or `null` required strings become empty so the validation rules
/// report them by name.
#[derive(Debug, Deserialize)]
pub(crate) struct CompanyRequest {
    pub jurisdiction: Option<String>,
    pub company_name: Option<String>,
    pub company_address: Option<String>,
    pub nature_of_business: Option<String>,
    pub number_of_directors: Option<i64>,
    pub number_of_shareholders: Option<i64>,
    pub sec_code: Option<String>,
}

impl From<CompanyRequest> for CompanyDraft {
    fn from(request: CompanyRequest) -> Self {
        CompanyDraft {
            jurisdiction: request.jurisdiction.unwrap_or_default(),
            company_name: request.company_name.unwrap_or_default(),
            company_address: request.company_address.unwrap_or_default(),
            nature_of_business: request.nature_of_business,
            number_of_directors: request.number_of_directors,
            number_of_shareholders: request.number_of_shareholders,
            sec_code: request.sec_code,
        }
    }
}

/// Decodes the body as JSON whatever `Content-Type` the client sent.
pub(super) async fn parse_company_request(req: &mut Request) -> Result<CompanyDraft, ApiError> {
    let payload = req.payload().await.map_err(|error| {
        tracing::debug!("failed to read company body: {error}");

        ApiError::bad_request("Invalid request body")
    })?;

    serde_json::from_slice::<CompanyRequest>(payload)
        .map(Into::into)
        .map_err(|error| {
            tracing::debug!("rejected company body: {error}");

            ApiError::bad_request("Invalid request body")
        })
}

/// Create Company Handler
#[endpoint(
    tags("companies"),
    summary = "Create Company",
    responses(
        (status_code = StatusCode::CREATED, description = "Company created"),
    ),
)]
#[tracing::instrument(
    name = "companies.create",
    skip(req, depot, res),
    fields(company_id = tracing::field::Empty),
    err
)]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<CompanyResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let draft = parse_company_request(req).await?;

    let company = state
        .app
        .companies
        .create_company(draft)
        .await
        .map_err(|error| into_api_error(error, CompanyOperation::Create))?;

    tracing::Span::current().record("company_id", tracing::field::display(company.id));

    res.add_header(LOCATION, format!("/api/v1/companies/{}", company.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    tracing::info!(company_id = %company.id, "created company");

    Ok(Json(company.into()))
}
