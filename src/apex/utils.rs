use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct SendResponse {
    pub success: bool,
    pub message: String,
    pub response_content: String,
}

impl SendResponse {
    #[inline]
    pub fn sent(message: String, response_content: String) -> Self {
        Self {
            success: true,
            message,
            response_content,
        }
    }

    #[inline]
    pub fn failed(message: String, response_content: String) -> Self {
        Self {
            success: false,
            message,
            response_content,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("Missing required field: {0}")]
    Validation(&'static str),
    #[error("Invalid JSON data in request body")]
    MalformedBody,
    #[error("REST API {0} is missing in configuration")]
    Configuration(&'static str),
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("HTTP Error: {status}")]
    Provider { status: u16, body: String },
}

impl SendError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::MalformedBody => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Transport(_) | Self::Provider { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn into_send_response(self) -> SendResponse {
        let message = self.to_string();
        let response_content = match self {
            Self::Transport(source) => source.to_string(),
            Self::Provider { body, .. } => body,
            Self::Validation(_) | Self::MalformedBody | Self::Configuration(_) => String::new(),
        };
        SendResponse::failed(message, response_content)
    }
}

impl IntoResponse for SendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(self.into_send_response())).into_response()
    }
}
