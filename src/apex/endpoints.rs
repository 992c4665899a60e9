use axum::response::IntoResponse;

pub const HEALTH_MESSAGE: &str =
    "MessageFlow SMS/Email API app is running. Use POST /sms or POST /email endpoints.";

pub async fn health_endpoint() -> impl IntoResponse {
    HEALTH_MESSAGE
}
