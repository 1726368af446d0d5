pub mod suggest;
pub mod terms;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::autocomplete::{self, Autocomplete};

/// Application context passed to all handlers.
pub struct Ctx {
    pub ac: Autocomplete,
}

/// API error response body.
#[derive(Serialize)]
pub struct ErrResp {
    pub message: String,
    pub data: Option<()>,
}

/// API error type.
#[derive(Debug)]
pub struct ApiErr {
    pub message: String,
    pub status: StatusCode,
}

impl ApiErr {
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }
}

impl From<autocomplete::Error> for ApiErr {
    fn from(err: autocomplete::Error) -> Self {
        match err {
            autocomplete::Error::InvalidInput(m) => Self::new(m, StatusCode::BAD_REQUEST),
        }
    }
}

impl From<JsonRejection> for ApiErr {
    fn from(err: JsonRejection) -> Self {
        Self::new(err.body_text(), StatusCode::BAD_REQUEST)
    }
}

impl IntoResponse for ApiErr {
    fn into_response(self) -> Response {
        let json = Json(ErrResp {
            message: self.message,
            data: None,
        });
        (self.status, json).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ApiErr>;
