//! App Router

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*, trailing_slash::remove_slash};

use crate::{companies, healthcheck, observability, state::State, status};

/// Routes served by the process, before the OpenAPI document is attached.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    Router::new()
        .hoop(observability::request_logging)
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(state))
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(Router::with_path("metrics").get(observability::metrics_handler))
        .push(Router::with_path("api/v1").get(status::handler).push(
            Router::with_path("companies")
                .get(companies::index::handler)
                .post(companies::create::handler)
                .push(
                    Router::with_path("{id}")
                        .get(companies::get::handler)
                        .put(companies::update::handler)
                        .delete(companies::delete::handler),
                ),
        ))
}
