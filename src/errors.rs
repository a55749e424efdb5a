use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use crate::db::StoreError;
use crate::models::field_schema::ValidationError;
use crate::resource::Operation;
use crate::views::RenderError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("Album {0} not found")]
    NotFound(String),
    #[error("Operation {0} is not enabled")]
    OperationDisabled(Operation),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(_) | AppError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::OperationDisabled(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            // Details stay in the log; clients get a generic failure.
            error!("request failed: {self}");
            return HttpResponse::build(status).body("Internal Server Error");
        }
        HttpResponse::build(status).body(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_errors_to_status_codes() {
        let validation = AppError::from(ValidationError::MissingField("name"));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(validation.to_string(), "name is required");

        assert_eq!(AppError::NotFound("7".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::OperationDisabled(Operation::Delete).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Store(StoreError::Blocking).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn server_errors_hide_their_details() {
        let resp = AppError::Store(StoreError::Blocking).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "Internal Server Error");

        let resp = AppError::NotFound("7".into()).error_response();
        let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "Album 7 not found");
    }
}
