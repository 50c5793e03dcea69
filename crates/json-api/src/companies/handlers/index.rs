//! Company Index Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use companies_app::domain::companies::data::{CompaniesPage, ListCompaniesParams};

use crate::{
    companies::{
        errors::{CompanyOperation, into_api_error},
        get::CompanyResponse,
    },
    errors::ApiError,
    extensions::*,
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CompaniesResponse {
    /// The requested page of companies, newest first
    pub companies: Vec<CompanyResponse>,

    /// Effective page size
    pub limit: u32,

    /// Effective number of skipped companies
    pub offset: u64,

    /// Number of companies matching the filter, ignoring pagination
    pub total: u64,
}

impl From<CompaniesPage> for CompaniesResponse {
    fn from(page: CompaniesPage) -> Self {
        CompaniesResponse {
            companies: page.companies.into_iter().map(Into::into).collect(),
            limit: page.limit,
            offset: page.offset,
            total: page.total,
        }
    }
}

/// Company Index Handler
///
/// Returns a page of companies, optionally filtered by jurisdiction.
#[endpoint(tags("companies"), summary = "List Companies")]
pub(crate) async fn handler(
    limit: QueryParam<String, false>,
    offset: QueryParam<String, false>,
    jurisdiction: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<CompaniesResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let params = ListCompaniesParams {
        limit: limit.into_optional_i64("Invalid limit parameter")?,
        offset: offset.into_optional_i64("Invalid offset parameter")?,
        jurisdiction: jurisdiction.into_inner().filter(|value| !value.is_empty()),
    };

    let page = state
        .app
        .companies
        .list_companies(params)
        .await
        .map_err(|error| into_api_error(error, CompanyOperation::List))?;

    Ok(Json(page.into()))
}
