//! Get Company Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use companies_app::domain::companies::records::CompanyRecord;

use crate::{
    companies::errors::{CompanyOperation, into_api_error},
    errors::ApiError,
    extensions::*,
    state::State,
};

use super::parse_company_id;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompanyResponse {
    /// The unique identifier of the company
    pub id: Uuid,

    /// One of `UK`, `Singapore` or `Caymens`
    pub jurisdiction: String,

    pub company_name: String,

    pub company_address: String,

    pub nature_of_business: Option<String>,

    pub number_of_directors: Option<i32>,

    pub number_of_shareholders: Option<i32>,

    /// Standard industry classification code
    pub sec_code: Option<String>,

    /// The date and time the company was created
    pub created_at: String,

    /// The date and time the company was last updated
    pub updated_at: String,
}

impl From<CompanyRecord> for CompanyResponse {
    fn from(company: CompanyRecord) -> Self {
        CompanyResponse {
            id: company.id.into(),
            jurisdiction: company.jurisdiction.to_string(),
            company_name: company.company_name,
            company_address: company.company_address,
            nature_of_business: company.nature_of_business,
            number_of_directors: company.number_of_directors,
            number_of_shareholders: company.number_of_shareholders,
            sec_code: company.sec_code,
            created_at: company.created_at.to_string(),
            updated_at: company.updated_at.to_string(),
        }
    }
}

/// Get Company Handler
///
/// Returns a company.
#[endpoint(tags("companies"), summary = "Get Company")]
pub(crate) async fn handler(
    id: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<CompanyResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let company = parse_company_id(id)?;

    let company = state
        .app
        .companies
        .get_company(company)
        .await
        .map_err(|error| into_api_error(error, CompanyOperation::Get))?;

    Ok(Json(company.into()))
}
