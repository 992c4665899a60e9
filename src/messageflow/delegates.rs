use std::time::Duration;

use axum::http::StatusCode;
use serde::de::DeserializeOwned;

use super::schemas::{MESSAGEFLOW_API_BASE_URL, OutboundMessage, ProviderConfig};
use crate::apex::utils::{SendError, SendResponse};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct MessageFlowClient {
    http: reqwest::Client,
    base_url: String,
    authorization: String,
    application_key: String,
}

impl MessageFlowClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self::with_base_url(config, MESSAGEFLOW_API_BASE_URL.to_string())
    }

    pub fn with_base_url(config: ProviderConfig, base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http,
            base_url,
            authorization: config.authorization,
            application_key: config.application_key,
        }
    }

    pub async fn send<T: OutboundMessage>(&self, request: &T) -> Result<SendResponse, SendError> {
        if self.authorization.is_empty() {
            return Err(SendError::Configuration("authorization"));
        }
        if self.application_key.is_empty() {
            return Err(SendError::Configuration("application key"));
        }

        let url = format!("{}/{}", self.base_url, T::ENDPOINT);

        if let Ok(payload) = serde_json::to_string(request) {
            tracing::debug!("API request payload: {payload}");
        }
        tracing::debug!(
            "Headers set - Authorization: {}..., Application-Key: {}...",
            masked(&self.authorization),
            masked(&self.application_key)
        );
        tracing::info!("Sending HTTP request to: {url}");

        let response = self
            .http
            .post(&url)
            .header("Content-Type", "application/json")
            .header("Authorization", &self.authorization)
            .header("Application-Key", &self.application_key)
            .json(request)
            .send()
            .await
            .map_err(SendError::Transport)?;

        let status = response.status();
        let body = response.text().await.map_err(SendError::Transport)?;

        tracing::info!("API response status: {status}");
        tracing::debug!("API response content: {body}");

        translate_response(status, body, T::SENT_MESSAGE)
    }
}

/// Core relay flow shared by every message type: parse, validate, send.
/// Every outcome is a well-formed envelope; the endpoints only map it onto
/// the transport status.
pub async fn relay<T>(client: &MessageFlowClient, body: &[u8]) -> Result<SendResponse, SendError>
where
    T: OutboundMessage + DeserializeOwned,
{
    let request: T = serde_json::from_slice(body).map_err(|_| SendError::MalformedBody)?;

    request.validate().map_err(SendError::Validation)?;

    client.send(&request).await
}

fn translate_response(
    status: StatusCode,
    body: String,
    sent_message: &str,
) -> Result<SendResponse, SendError> {
    if !status.is_success() {
        return Err(SendError::Provider {
            status: status.as_u16(),
            body,
        });
    }

    Ok(SendResponse::sent(extract_message(&body, sent_message), body))
}

// Best-effort: a body that is not a JSON object falls back to the fixed
// success message while the raw body is still returned to the caller.
fn extract_message(body: &str, sent_message: &str) -> String {
    let parsed: serde_json::Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!("Can not parse provider response, but HTTP status is success: {error}");
            return sent_message.to_string();
        }
    };

    match parsed.get("message") {
        Some(serde_json::Value::String(message)) => message.clone(),
        Some(other) => other.to_string(),
        None => sent_message.to_string(),
    }
}

fn masked(secret: &str) -> String {
    secret.chars().take(10).collect()
}
