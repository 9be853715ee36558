//! # HTTP Server
//!
//! Axum server exposing the single method-polymorphic `/prompt` route.
//! Every response is transport status 200 with a pretty-printed JSON
//! envelope; success and failure are distinguished by the envelope's
//! `status` field only.

pub mod config;

pub use config::HttpServerConfig;

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Query, Request, State};
use axum::http::{header, Method};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::dispatch::Dispatcher;
use crate::store::DocumentStore;

/// HTTP server for the prompt facade
pub struct PromptServer<S: DocumentStore> {
    config: HttpServerConfig,
    dispatcher: Arc<Dispatcher<S>>,
}

impl<S: DocumentStore + 'static> PromptServer<S> {
    /// Create a server with the default bind configuration
    pub fn new(dispatcher: Dispatcher<S>) -> Self {
        Self::with_config(HttpServerConfig::default(), dispatcher)
    }

    /// Create a server with a custom bind configuration
    pub fn with_config(config: HttpServerConfig, dispatcher: Dispatcher<S>) -> Self {
        Self {
            config,
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Build the axum router
    pub fn router(&self) -> Router {
        let cors = if self.config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = self
                .config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        // The CORS layer answers every OPTIONS request it sees, which
        // would hide the dispatcher's OPTIONS envelope. Plain OPTIONS
        // (no Access-Control-Request-Method header) is split off ahead
        // of it; real preflights still belong to the CORS layer.
        Router::new()
            .route("/prompt", any(prompt_handler::<S>))
            .layer(cors)
            .layer(middleware::from_fn_with_state(
                Arc::clone(&self.dispatcher),
                plain_options::<S>,
            ))
            .with_state(Arc::clone(&self.dispatcher))
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid socket address: {e}"),
            )
        })?;

        let router = self.router();
        tracing::info!(%addr, "prompt facade listening");

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, router).await?;

        Ok(())
    }
}

/// The single method-polymorphic handler.
///
/// The body is read tolerantly: anything that does not parse as JSON is
/// treated as absent, and the dispatcher decides whether that matters.
async fn prompt_handler<S: DocumentStore + 'static>(
    State(dispatcher): State<Arc<Dispatcher<S>>>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> Response {
    let id = params.get("id").map(String::as_str);
    let body = serde_json::from_slice::<Value>(&body).ok();

    tracing::info!(method = %method, id = ?id, "prompt request");

    envelope_response(&dispatcher.handle(&method, id, body))
}

/// Answer non-preflight OPTIONS requests with the dispatcher's envelope.
///
/// Preflights (OPTIONS carrying `Access-Control-Request-Method`) pass
/// through to the CORS layer, which owns that exchange.
async fn plain_options<S: DocumentStore + 'static>(
    State(dispatcher): State<Arc<Dispatcher<S>>>,
    request: Request,
    next: Next,
) -> Response {
    let preflight = request
        .headers()
        .contains_key(header::ACCESS_CONTROL_REQUEST_METHOD);

    if request.method() == Method::OPTIONS && request.uri().path() == "/prompt" && !preflight {
        tracing::info!(method = %Method::OPTIONS, "prompt request");
        return envelope_response(&dispatcher.handle(&Method::OPTIONS, None, None));
    }

    next.run(request).await
}

/// Always 200 with a pretty-printed body; failures live in the envelope.
fn envelope_response(envelope: &crate::dispatch::Envelope) -> Response {
    let body = serde_json::to_string_pretty(envelope).unwrap_or_else(|_| {
        r#"{"status": "ERROR", "message": "response serialization failed"}"#.to_string()
    });
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
