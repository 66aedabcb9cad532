//! Application wiring and server lifecycle.

use crate::config::CampusConfig;
use crate::handlers;
use crate::handlers::upload::MAX_UPLOAD_BODY_BYTES;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::{CampusAssistant, CampusDirectory, LocalUploadStore, UploadStore};
use axum::{
    extract::DefaultBodyLimit,
    http::{header, Method},
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::{
    error_detail_middleware, panic_response, request_id_middleware, security_headers_middleware,
    DiagnosticMode, REQUEST_ID_HEADER,
};
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: CampusConfig,
    pub assistant: CampusAssistant,
    pub directory: Arc<CampusDirectory>,
    pub uploads: Arc<dyn UploadStore>,
    pub started_at: Instant,
}

/// Build the HTTP router with every route and layer.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let diagnostics = DiagnosticMode::new(state.config.expose_error_details());

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health_check))
        .route("/api/chat", post(handlers::chat))
        .route(
            "/api/upload-pdf",
            post(handlers::upload_pdf).layer(DefaultBodyLimit::max(MAX_UPLOAD_BODY_BYTES)),
        )
        .route("/api/timetable", get(handlers::timetable))
        .route("/api/contacts", get(handlers::contacts))
        .route("/api/locations", get(handlers::locations))
        .fallback(handlers::route_not_found)
        .method_not_allowed_fallback(handlers::route_not_found)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn_with_state(diagnostics, error_detail_middleware))
        .layer(from_fn(security_headers_middleware))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                    version = ?request.version(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .with_state(state)
}

type ServerFuture = Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>;

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: ServerFuture,
}

impl Application {
    /// Build the application backed by the Gemini provider.
    pub async fn build(config: CampusConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.chat_model.clone(),
            api_base: config.google.api_base.clone(),
        };
        let provider = GeminiTextProvider::new(gemini_config)
            .map_err(|e| AppError::ConfigError(anyhow::Error::new(e)))?;

        tracing::info!(
            model = %config.models.chat_model,
            configured = provider.is_configured(),
            "Initialized Gemini text provider"
        );

        Self::build_with_provider(config, Arc::new(provider)).await
    }

    /// Build the application around an explicit provider.
    pub async fn build_with_provider(
        config: CampusConfig,
        provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let uploads = LocalUploadStore::new(&config.storage.upload_dir)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to initialize upload directory {}: {}",
                    config.storage.upload_dir,
                    e
                );
                e
            })?;

        let state = AppState {
            config: config.clone(),
            assistant: CampusAssistant::new(provider),
            directory: Arc::new(CampusDirectory::sample()),
            uploads: Arc::new(uploads),
            started_at: Instant::now(),
        };

        let app = build_router(state);

        // Port 0 picks a random port for tests
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await
        };

        Ok(Self {
            port,
            server: Box::pin(server),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
