use std::error::{Error as StdError};

use actix_web::{
    error::ResponseError,
    http::StatusCode,
    HttpResponse,
    HttpResponseBuilder,
};
use thiserror::Error;

use manazza_layout::TemplateError;

use crate::pages::fragments::PageError;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("{0} not found")]
    NotFoundError(&'static str),

    #[error("internal error: {0}")]
    InternalError(String),
}

impl HttpError {
    pub fn from_internal(error: impl StdError) -> Self {
        Self::InternalError(error.to_string())
    }

    fn error_message(&self) -> String {
        match self {
            // Don't expose internal error details
            HttpError::InternalError(_) => "internal error".to_owned(),
            other_error => other_error.to_string(),
        }
    }
}

impl From<PageError> for HttpError {
    fn from(error: PageError) -> Self {
        match error {
            PageError::InvalidName | PageError::NotFound => {
                HttpError::NotFoundError("page")
            },
            PageError::IoError(_) => HttpError::from_internal(error),
        }
    }
}

impl From<TemplateError> for HttpError {
    fn from(error: TemplateError) -> Self {
        HttpError::from_internal(error)
    }
}

impl ResponseError for HttpError {
    fn error_response(&self) -> HttpResponse {
        let error_message = self.error_message();
        HttpResponseBuilder::new(self.status_code()).body(error_message)
    }

    fn status_code(&self) -> StatusCode {
        match self {
            HttpError::NotFoundError(_) => StatusCode::NOT_FOUND,
            HttpError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
