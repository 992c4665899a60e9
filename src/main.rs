use axum::{
    Router,
    routing::{get, post},
};
use dotenv::dotenv;
use std::{env::var, net::SocketAddr};

mod apex;
mod email;
mod messageflow;
mod sms;

use apex::endpoints::*;
use email::endpoints::*;
use messageflow::delegates::MessageFlowClient;
use messageflow::schemas::ProviderConfig;
use sms::endpoints::*;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) messageflow: MessageFlowClient,
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health_endpoint).post(health_endpoint))
        .route("/sms", post(send_sms_endpoint))
        .route("/email", post(send_email_endpoint))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "messageflow=info".into()),
        )
        .init();

    let config = ProviderConfig::load();
    let state = AppState {
        messageflow: MessageFlowClient::new(config),
    };

    let domain = var("DOMAIN").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = var("PORT")
        .unwrap_or_else(|_| "3000".to_string())
        .parse::<u16>()
        .expect("Failed to parse PORT");

    let addr = SocketAddr::from((
        domain
            .parse::<std::net::IpAddr>()
            .expect("Failed to parse DOMAIN"),
        port,
    ));
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    tracing::info!("Listening on {addr}");
    axum::serve(listener, app(state)).await.unwrap();
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
    use serde_json::{Value, json};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_app(base_url: String) -> Router {
        let config = ProviderConfig {
            authorization: "test-token".to_string(),
            application_key: "test-key".to_string(),
        };
        app(AppState {
            messageflow: MessageFlowClient::with_base_url(config, base_url),
        })
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(CONTENT_TYPE, "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn health_answers_get_and_post() {
        for method in ["GET", "POST"] {
            let app = test_app("http://127.0.0.1:9".to_string());
            let response = app
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri("/")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK);
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
                .await
                .unwrap();
            assert_eq!(&bytes[..], HEALTH_MESSAGE.as_bytes());
        }
    }

    #[tokio::test]
    async fn sms_with_missing_sender_is_rejected() {
        let app = test_app("http://127.0.0.1:9".to_string());
        let body = json!({
            "message": "hello",
            "phoneNumbers": ["+48500500500"]
        });

        let (status, envelope) = post_json(app, "/sms", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["message"], "Missing required field: sender");
        assert_eq!(envelope["response_content"], "");
    }

    #[tokio::test]
    async fn sms_with_invalid_json_is_rejected() {
        let app = test_app("http://127.0.0.1:9".to_string());

        let (status, envelope) = post_json(app, "/sms", "{ not json".to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["message"], "Invalid JSON data in request body");
    }

    #[tokio::test]
    async fn email_with_missing_subject_is_rejected() {
        let app = test_app("http://127.0.0.1:9".to_string());
        let body = json!({
            "smtpAccount": "1.example.smtp",
            "from": {"email": "noreply@example.com"},
            "to": [{"email": "user@example.com"}],
            "content": {"text": "hello"}
        });

        let (status, envelope) = post_json(app, "/email", body.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["message"], "Missing required field: subject");
    }

    #[tokio::test]
    async fn sms_relays_to_the_provider_and_returns_the_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/sms"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"message":"queued"}"#))
            .mount(&server)
            .await;

        let app = test_app(server.uri());
        let body = json!({
            "sender": "INFO",
            "message": "hello",
            "phoneNumbers": ["+48500500500"]
        });

        let (status, envelope) = post_json(app, "/sms", body.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(envelope["success"], true);
        assert_eq!(envelope["message"], "queued");
        assert_eq!(envelope["response_content"], r#"{"message":"queued"}"#);
    }

    #[tokio::test]
    async fn email_provider_failure_maps_to_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/email"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&server)
            .await;

        let app = test_app(server.uri());
        let body = json!({
            "subject": "Hi",
            "smtpAccount": "1.example.smtp",
            "from": {"email": "noreply@example.com"},
            "to": [{"email": "user@example.com"}],
            "content": {"text": "hello"}
        });

        let (status, envelope) = post_json(app, "/email", body.to_string()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(envelope["success"], false);
        assert_eq!(envelope["message"], "HTTP Error: 500");
        assert_eq!(envelope["response_content"], "upstream down");
    }
}
