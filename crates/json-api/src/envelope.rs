//! JSON response envelope.
//!
//! Every endpoint under `/api` answers with the same wrapper:
//! `{ "success": bool, "message": string, "data"?: any, "error"?: string }`.

use salvo::{
    http::StatusCode,
    prelude::{Json, Response},
    writing::Scribe,
};
use serde::{Deserialize, Serialize};

/// Wire shape shared by successful and failed responses.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Successful response carrying `data`.
#[derive(Debug)]
pub(crate) struct ApiResponse<T> {
    status: StatusCode,
    message: String,
    data: T,
}

impl<T> ApiResponse<T> {
    pub(crate) fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::OK,
            message: message.into(),
            data,
        }
    }

    pub(crate) fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            message: message.into(),
            data,
        }
    }
}

impl<T> Scribe for ApiResponse<T>
where
    T: Serialize + Send,
{
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope {
            success: true,
            message: self.message,
            data: Some(self.data),
            error: None,
        }));
    }
}

/// Failed response.
///
/// `error` is only populated for storage failures, where it carries the
/// driver's message verbatim.
#[derive(Debug)]
pub(crate) struct ApiError {
    pub(crate) status: StatusCode,
    pub(crate) message: String,
    pub(crate) error: Option<String>,
}

impl ApiError {
    pub(crate) fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
            error: None,
        }
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
            error: None,
        }
    }

    pub(crate) fn internal(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
            error: Some(error.into()),
        }
    }
}

impl Scribe for ApiError {
    fn render(self, res: &mut Response) {
        res.status_code(self.status);
        res.render(Json(Envelope::<()> {
            success: false,
            message: self.message,
            data: None,
            error: self.error,
        }));
    }
}
