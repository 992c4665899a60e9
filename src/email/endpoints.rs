use axum::{
    Json,
    body::Body,
    extract::State,
    http::Request,
    response::IntoResponse,
};

use super::schemas::EmailRequest;
use crate::{
    AppState,
    apex::utils::SendError,
    messageflow::delegates::relay,
};

pub async fn send_email_endpoint(
    State(state): State<AppState>,
    req: Request<Body>,
) -> impl IntoResponse {
    tracing::info!("Received Email request");

    let body_bytes = match axum::body::to_bytes(req.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(_) => {
            return SendError::MalformedBody.into_response();
        }
    };

    match relay::<EmailRequest>(&state.messageflow, &body_bytes).await {
        Ok(response) => Json(response).into_response(),
        Err(error) => error.into_response(),
    }
}
