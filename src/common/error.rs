use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::borrow::Cow;
use tracing::error;

pub type ServiceResult<T> = Result<T, AppError>;
pub type ServiceResponse<T> = ServiceResult<Json<T>>;

#[track_caller]
pub fn unexpected<T, E: Into<anyhow::Error>>(e: E) -> ServiceResult<T> {
    let caller = std::panic::Location::caller();
    error!("An unexpected error has occurred at {caller}: {}", e.into());
    Err(AppError::Unexpected)
}

#[derive(Debug)]
pub enum AppError {
    Unexpected,
    DecodingRequestFailed,

    MessagesNotFound,
    MessagesMissingFields,
    MessagesEmptyUpdate,
    MessagesInvalidValue(&'static str),
    MessagesRejectedByStore(String),
}

impl AppError {
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            AppError::Unexpected => Cow::Borrowed("An unexpected error has occurred."),
            AppError::DecodingRequestFailed => Cow::Borrowed("Failed to decode request"),

            AppError::MessagesNotFound => Cow::Borrowed("Message not found"),
            AppError::MessagesMissingFields => Cow::Borrowed("Missing required fields"),
            AppError::MessagesEmptyUpdate => Cow::Borrowed("must include 'body' or 'username'"),
            AppError::MessagesInvalidValue(field) => Cow::Owned(format!("Invalid value for {field}")),
            AppError::MessagesRejectedByStore(description) => Cow::Owned(description.clone()),
        }
    }

    pub const fn http_status_code(&self) -> StatusCode {
        match self {
            AppError::DecodingRequestFailed
            | AppError::MessagesMissingFields
            | AppError::MessagesEmptyUpdate
            | AppError::MessagesInvalidValue(_)
            | AppError::MessagesRejectedByStore(_) => StatusCode::BAD_REQUEST,

            AppError::MessagesNotFound => StatusCode::NOT_FOUND,

            AppError::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn response_parts(&self) -> (StatusCode, Json<ErrorResponse>) {
        let status = self.http_status_code();
        let response = ErrorResponse {
            error: self.message().into_owned(),
        };
        (status, Json(response))
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.response_parts().into_response()
    }
}
