//! JSON error envelope.

use salvo::{
    Response, Scribe,
    http::StatusCode,
    oapi::{self, Components, EndpointOutRegister, Operation, ToSchema},
    prelude::Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Envelope shared by error responses and the API status probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageResponse {
    /// `true` when the response reports a failure
    pub error: bool,

    /// Human-readable message
    pub msg: String,
}

impl MessageResponse {
    pub(crate) fn ok(msg: impl Into<String>) -> Self {
        Self {
            error: false,
            msg: msg.into(),
        }
    }

    pub(crate) fn error(msg: impl Into<String>) -> Self {
        Self {
            error: true,
            msg: msg.into(),
        }
    }
}

/// An HTTP failure rendered as `{"error": true, "msg": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {msg}")]
pub(crate) struct ApiError {
    status: StatusCode,
    msg: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            msg: msg.into(),
        }
    }

    pub(crate) fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    pub(crate) fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(MessageResponse::error(self.msg)));
    }
}

impl EndpointOutRegister for ApiError {
    fn register(components: &mut Components, operation: &mut Operation) {
        for (status, description) in [
            (StatusCode::BAD_REQUEST, "Bad Request"),
            (StatusCode::NOT_FOUND, "Not Found"),
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
        ] {
            operation.responses.insert(
                status.as_str(),
                oapi::Response::new(description).add_content(
                    "application/json",
                    MessageResponse::to_schema(components),
                ),
            );
        }
    }
}
