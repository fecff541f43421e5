use crate::models::views::ErrorResponse;
use axum::{
    http::{StatusCode, Uri},
    response::{IntoResponse, Json, Response},
};
use tracing::debug;

pub async fn fallback_handler(uri: Uri) -> Response {
    debug!(path = %uri.path(), "No route matched");

    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            success: false,
            error: "Not found. Valid endpoints: /, /register, /login, /logout, /students, \
                    /edit/{id}, /update/{id}, /delete/{id}, /health"
                .to_string(),
        }),
    )
        .into_response()
}
