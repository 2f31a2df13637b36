//! HTTP-facing error type.
//!
//! QR encoding failures are logged and their cause is echoed to the client
//! as the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::qr::EncodeError;

/// Request handling error.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// No route matched the request path.
    #[error("not found")]
    NotFound,

    /// The QR code could not be generated.
    #[error("QR code generation error: {0}")]
    Encode(#[from] EncodeError),
}

impl IntoResponse for ServeError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "404 page not found".to_string()),
            Self::Encode(err) => {
                tracing::error!(error = %err, "QR code generation error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (
            status,
            [("content-type", "text/plain; charset=utf-8")],
            format!("{message}\n"),
        )
            .into_response()
    }
}
