//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use companies_app::{
    context::AppContext,
    domain::companies::{
        MockCompaniesService,
        records::{CompanyRecord, CompanyUuid, Jurisdiction},
    },
};

use crate::state::State;

pub(crate) fn state_with_companies(companies: MockCompaniesService) -> Arc<State> {
    State::from_app_context(AppContext::with_companies(Arc::new(companies)))
}

pub(crate) fn companies_service(companies: MockCompaniesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_companies(companies)))
            .push(route),
    )
}

pub(crate) fn make_company(id: CompanyUuid) -> CompanyRecord {
    CompanyRecord {
        id,
        jurisdiction: Jurisdiction::Uk,
        company_name: "Acme Ltd".to_string(),
        company_address: "1 Main St".to_string(),
        nature_of_business: None,
        number_of_directors: None,
        number_of_shareholders: None,
        sec_code: None,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
