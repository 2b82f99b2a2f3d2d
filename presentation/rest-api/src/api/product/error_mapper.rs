use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::media::MediaError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::NameEmpty => (StatusCode::BAD_REQUEST, "product.name_empty"),
            ProductError::DescriptionEmpty => {
                (StatusCode::BAD_REQUEST, "product.description_empty")
            }
            ProductError::PriceNotPositive => {
                (StatusCode::BAD_REQUEST, "product.price_not_positive")
            }
            ProductError::ImageRequired => (StatusCode::BAD_REQUEST, "product.image_required"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "product.not_found"),
            ProductError::Media(MediaError::UnsupportedFormat) => {
                (StatusCode::BAD_REQUEST, "media.unsupported_format")
            }
            ProductError::Media(_) => (StatusCode::INTERNAL_SERVER_ERROR, "media.failure"),
            ProductError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (
            status,
            Json(ErrorResponse {
                message: message.to_string(),
            }),
        )
    }
}
