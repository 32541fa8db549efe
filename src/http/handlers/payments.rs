use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use crate::domain::payment::{GetPaymentResponse, PostPaymentRequest};
use crate::AppState;

pub async fn create_payment(
    State(state): State<AppState>,
    Json(req): Json<PostPaymentRequest>,
) -> impl IntoResponse {
    match state.payment_service.process(req).await {
        Ok(resp) => (axum::http::StatusCode::OK, Json(resp)).into_response(),
        Err((status, body)) => (status, Json(body)).into_response(),
    }
}

pub async fn get_payment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.payment_service.lookup(&id) {
        Some(record) => {
            (axum::http::StatusCode::OK, Json(GetPaymentResponse { record })).into_response()
        }
        None => axum::http::StatusCode::NO_CONTENT.into_response(),
    }
}

pub async fn health() -> impl IntoResponse {
    (axum::http::StatusCode::OK, "ok")
}
