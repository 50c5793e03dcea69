//! Cross-origin policy

use salvo::{
    cors::{AllowHeaders, AllowOrigin, Cors, CorsHandler},
    http::Method,
};

/// Permissive policy: any origin and header, the five verbs the API routes.
pub(crate) fn handler() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(AllowHeaders::any())
        .into_handler()
}
