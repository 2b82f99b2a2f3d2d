use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Generic error envelope returned by every failing endpoint.
/// Downstream failure detail is never exposed to the caller.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
