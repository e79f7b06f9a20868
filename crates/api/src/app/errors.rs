use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;
use utoipa::ToSchema;

use catalog_core::DomainError;

/// Message returned for storage failures; the driver detail only goes to the log.
pub const STORAGE_ERROR_MESSAGE: &str = "internal storage error";

/// Error body shared by every failing endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Machine-readable code, e.g. `validation_error`.
    pub error: String,
    pub message: String,
}

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(e) => {
            tracing::warn!(error = %e, "rejected invalid product");
            json_error(StatusCode::BAD_REQUEST, "validation_error", e.to_string())
        }
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
        DomainError::Storage(msg) => {
            tracing::error!(error = %msg, "storage failure");
            json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "storage_error",
                STORAGE_ERROR_MESSAGE,
            )
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(ErrorBody {
            error: code.to_string(),
            message: message.into(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::ValidationError;
    use serde_json::Value;

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn storage_detail_is_not_exposed() {
        let response = domain_error_to_response(DomainError::storage(
            "database error in get_product: relation \"products\" does not exist",
        ));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "storage_error");
        assert_eq!(body["message"], STORAGE_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn validation_message_is_passed_through() {
        let response = domain_error_to_response(ValidationError::EmptyName.into());
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "name cannot be empty");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let response = domain_error_to_response(DomainError::NotFound);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "not_found");
    }
}
