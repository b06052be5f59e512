//! Exchange HTTP server powered by axum
//!
//! Serves:
//! - `GET  /.well-known/agent.json` — agent descriptor discovery
//! - `POST /tasks/send`             — synchronous task exchange
//! - `GET  /health`                 — health check

pub mod validate;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::{
    agent::TaskAgent,
    protocol::{AgentDescriptor, ExchangeError, TaskResponse},
};

/// Shared state for the exchange server
///
/// The descriptor is immutable and the agent is a shared handler; no mutable
/// state is shared across requests.
#[derive(Clone)]
pub struct ExchangeState {
    /// Descriptor served on discovery requests
    pub descriptor: Arc<AgentDescriptor>,

    /// Handler invoked for each task
    pub agent: Arc<dyn TaskAgent>,
}

impl ExchangeState {
    /// Create the server state
    pub fn new(descriptor: AgentDescriptor, agent: Arc<dyn TaskAgent>) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            agent,
        }
    }
}

/// Build the axum router for the exchange server
pub fn build_router(state: ExchangeState) -> Router {
    Router::new()
        .route("/.well-known/agent.json", get(get_descriptor))
        .route("/tasks/send", post(send_task))
        .route("/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the exchange server on the given address
///
/// Runs until the listener fails; spawn it on the runtime for background use.
pub async fn serve(addr: SocketAddr, state: ExchangeState) -> anyhow::Result<()> {
    let agent_name = state.descriptor.name.clone();
    let app = build_router(state);

    tracing::info!(%addr, agent = %agent_name, "exchange server starting");
    tracing::info!("  discovery: http://{}/.well-known/agent.json", addr);
    tracing::info!("  tasks:     http://{}/tasks/send", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// GET /.well-known/agent.json — serve the descriptor verbatim
async fn get_descriptor(State(state): State<ExchangeState>) -> Json<Arc<AgentDescriptor>> {
    Json(state.descriptor.clone())
}

/// POST /tasks/send — validate, process, respond
///
/// One transition per call: received → validated → processed → responded,
/// with validation failure short-circuiting to an error response. Nothing is
/// retained once the response is produced.
async fn send_task(
    State(state): State<ExchangeState>,
    body: Bytes,
) -> (StatusCode, Json<TaskResponse>) {
    let request = match validate::parse_task_request(&body) {
        Ok(request) => request,
        Err(e) => return error_response(e),
    };

    tracing::debug!(task_id = %request.id, "task received");

    let reply = match state.agent.reply(&request.message).await {
        Ok(reply) => reply,
        Err(e) => return error_response(e),
    };

    let envelope = TaskResponse::exchange(request.id, request.message, reply);
    (StatusCode::OK, Json(envelope))
}

/// GET /health — liveness probe
async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Map an error to its status code and error envelope
///
/// Client-format errors map to 400; handler failures map to 500. The body
/// always carries `{status: "error", message}`.
fn error_response(error: ExchangeError) -> (StatusCode, Json<TaskResponse>) {
    let status = if error.is_client_fault() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    tracing::warn!(%error, "task rejected");
    (status, Json(TaskResponse::error(error.to_string())))
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::agent::TimeTeller;
    use crate::protocol::Message;

    use super::*;

    fn test_state() -> ExchangeState {
        let descriptor = AgentDescriptor::new(
            "Time Teller",
            "An agent that tells the current time",
            "http://127.0.0.1:5001/tasks/send",
        );
        ExchangeState::new(descriptor, Arc::new(TimeTeller::new()))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_descriptor_endpoint() {
        let app = build_router(test_state());
        let req = Request::builder()
            .uri("/.well-known/agent.json")
            .body(Body::empty())
            .expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()["content-type"].to_str().unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_send_task_success() {
        let app = build_router(test_state());
        let body = serde_json::json!({
            "id": "t1",
            "message": {"role": "user", "parts": [{"text": "what time is it?"}], "metadata": {}}
        });

        let req = Request::builder()
            .method("POST")
            .uri("/tasks/send")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).expect("json")))
            .expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_send_task_invalid_body() {
        let app = build_router(test_state());
        let req = Request::builder()
            .method("POST")
            .uri("/tasks/send")
            .body(Body::from("{}"))
            .expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_handler_failure_is_500_with_envelope() {
        struct FailingAgent;

        #[async_trait]
        impl TaskAgent for FailingAgent {
            async fn reply(&self, _message: &Message) -> Result<Message, ExchangeError> {
                Err(ExchangeError::Protocol("backend unavailable".into()))
            }
        }

        let descriptor = AgentDescriptor::new("Broken", "always fails", "http://127.0.0.1:5001");
        let state = ExchangeState::new(descriptor, Arc::new(FailingAgent));
        let app = build_router(state);

        let body = serde_json::json!({
            "id": "t1",
            "message": {"role": "user", "parts": [{"text": "hi"}], "metadata": {}}
        });
        let req = Request::builder()
            .method("POST")
            .uri("/tasks/send")
            .body(Body::from(serde_json::to_string(&body).expect("json")))
            .expect("request");

        let resp = app.oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("body");
        let envelope: TaskResponse = serde_json::from_slice(&bytes).expect("envelope");
        assert!(!envelope.is_success());
    }
}
