//! Integer query parameter parsing.

use salvo::oapi::extract::QueryParam;

use crate::errors::ApiError;

pub(crate) trait IntegerQueryExt {
    /// Absent or empty values are `None`. Anything else must parse as an
    /// integer or the request fails with `message`.
    fn into_optional_i64(self, message: &str) -> Result<Option<i64>, ApiError>;
}

impl IntegerQueryExt for QueryParam<String, false> {
    fn into_optional_i64(self, message: &str) -> Result<Option<i64>, ApiError> {
        self.into_inner()
            .filter(|value| !value.is_empty())
            .map(|value| value.parse::<i64>())
            .transpose()
            .map_err(|_ignored| ApiError::bad_request(message))
    }
}
