//! API status probe

use salvo::prelude::*;

use crate::errors::MessageResponse;

/// API Status Handler
///
/// Confirms the versioned API is mounted.
#[endpoint(tags("status"), summary = "API status")]
pub(crate) async fn handler() -> Json<MessageResponse> {
    Json(MessageResponse::ok("hello world"))
}
