use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use derive_more::Display;
use serde::Serialize;

/// Errors as the client sees them. Anything other than a missing order is
/// reported as a generic server error; the cause goes to the log only.
#[derive(Debug, Display)]
pub enum ApiError {
    #[display("Order not found")]
    NotFound,
    #[display("Server Error")]
    Internal,
}

#[derive(Serialize)]
struct ErrBody {
    message: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrBody {
            message: self.to_string(),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound,
            other => {
                tracing::error!(error = %other, "order store failure");
                Self::Internal
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::error!(error = %err, "rejected order payload");
        Self::Internal
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("not found")]
    NotFound,
    #[error("order {id} already exists")]
    Conflict { id: String },
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("database error: {0}")]
    Database(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
