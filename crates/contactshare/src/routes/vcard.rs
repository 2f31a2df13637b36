//! vCard download handler.

use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::response::IntoResponse;

use crate::state::AppState;
use crate::vcard;

/// Serve the contact card as an attachment.
pub async fn vcard_download(State(state): State<AppState>) -> impl IntoResponse {
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static("text/vcard")),
        (
            header::CONTENT_DISPOSITION,
            HeaderValue::from_static("attachment; filename=\"contact.vcf\""),
        ),
    ];

    (headers, vcard::encode(&state.identity))
}
