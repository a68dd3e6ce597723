//! HTTP API for the portfolio backend.
//!
//! # Endpoints
//!
//! - `GET /` - Health check
//! - `POST /api/contact` - Relay a contact form submission by email

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::relay::{ContactRelay, ContactRequest, RelayError, SmtpMailer};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Contact relay (immutable after start-up)
    relay: Arc<ContactRelay>,
    /// Allowed CORS origin; `None` allows any origin
    allowed_origin: Option<HeaderValue>,
}

impl AppState {
    /// Creates a state around an existing relay.
    ///
    /// `frontend_url` restricts CORS to that single origin.
    pub fn new(relay: ContactRelay, frontend_url: Option<&str>) -> anyhow::Result<Self> {
        // "*" means the same as unset
        let allowed_origin = frontend_url
            .filter(|url| url.trim() != "*")
            .map(|url| {
                HeaderValue::from_str(url.trim_end_matches('/'))
                    .with_context(|| format!("Invalid FRONTEND_URL: {url}"))
            })
            .transpose()?;

        Ok(Self {
            relay: Arc::new(relay),
            allowed_origin,
        })
    }

    /// Builds the SMTP-backed state from configuration.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        if !config.mail.has_credentials() {
            warn!("EMAIL_USER/EMAIL_PASS not set; contact submissions will fail to send");
        }

        let mailer = SmtpMailer::from_config(&config.mail)
            .with_context(|| format!("Failed to set up SMTP relay {}", config.mail.smtp_host))?;
        let relay = ContactRelay::new(
            Arc::new(mailer),
            config.mail.user.clone(),
            config.mail.timeout(),
        )?;

        Self::new(relay, config.server.frontend_url.as_deref())
    }

    /// Returns the contact relay.
    #[must_use]
    pub fn relay(&self) -> &ContactRelay {
        &self.relay
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "ok"
    pub status: String,
    /// Human-readable status line
    pub message: String,
}

/// Successful contact submission response.
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    /// Always true
    pub success: bool,
    /// Confirmation shown to the user
    pub message: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Underlying cause, for delivery failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }
}

impl From<RelayError> for (StatusCode, Json<ApiError>) {
    fn from(err: RelayError) -> Self {
        if err.is_validation() {
            return (StatusCode::BAD_REQUEST, Json(ApiError::new(err.to_string())));
        }

        let body = match err.detail() {
            Some(detail) => ApiError::with_detail(err.to_string(), detail),
            None => ApiError::new(err.to_string()),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body))
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "Portfolio backend is running".to_string(),
    })
}

/// POST /api/contact - Validate and relay a contact message.
async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> Result<Json<ContactResponse>, (StatusCode, Json<ApiError>)> {
    let Json(request) = payload.map_err(|rejection| {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiError::with_detail(
                "Invalid request body",
                rejection.body_text(),
            )),
        )
    })?;

    state.relay.submit(&request).await?;

    Ok(Json(ContactResponse {
        success: true,
        message: "Message sent successfully!".to_string(),
    }))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    let origin = match &state.allowed_origin {
        Some(origin) => AllowOrigin::list([origin.clone()]),
        None => AllowOrigin::from(Any),
    };
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(health_check))
        .route("/api/contact", post(submit_contact))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server on the configured host and port.
///
/// # Errors
///
/// Returns an error if the mail relay cannot be set up or the server fails
/// to bind.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| {
            format!(
                "Invalid listen address {}:{}",
                config.server.host, config.server.port
            )
        })?;

    let state = AppState::from_config(&config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::MailError;

    #[test]
    fn test_api_error_omits_missing_detail() {
        let json = serde_json::to_value(ApiError::new("All fields are required")).unwrap();
        assert_eq!(json, serde_json::json!({"error": "All fields are required"}));
    }

    #[test]
    fn test_validation_errors_map_to_bad_request() {
        let (status, Json(body)) = <(StatusCode, Json<ApiError>)>::from(RelayError::InvalidEmail);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, "Invalid email address");
        assert!(body.detail.is_none());
    }

    #[test]
    fn test_delivery_errors_map_to_server_error() {
        let err = RelayError::Delivery(MailError::Transport("connection refused".to_string()));
        let (status, Json(body)) = <(StatusCode, Json<ApiError>)>::from(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.error, "Failed to send email. Please try again later.");
        assert_eq!(body.detail.as_deref(), Some("connection refused"));
    }

    #[test]
    fn test_rejects_unusable_frontend_url() {
        struct NeverMailer;
        #[async_trait::async_trait]
        impl crate::relay::Mailer for NeverMailer {
            async fn send(&self, _: &crate::relay::OutboundEmail) -> Result<(), MailError> {
                Err(MailError::NotConfigured)
            }
        }

        let relay = || {
            ContactRelay::new(Arc::new(NeverMailer), None, std::time::Duration::from_secs(1))
                .unwrap()
        };
        assert!(AppState::new(relay(), Some("https://example.dev/")).is_ok());
        assert!(AppState::new(relay(), Some("bad\nurl")).is_err());
        assert!(AppState::new(relay(), Some("*")).unwrap().allowed_origin.is_none());
    }
}
