#![allow(dead_code)]

use axum::Router;
use campus_service::config::{
    CampusConfig, Environment, GoogleConfig, ModelConfig, StorageConfig,
    DEFAULT_CHAT_MODEL, DEFAULT_GEMINI_API_BASE,
};
use campus_service::services::providers::mock::{MockOutcome, MockTextProvider};
use campus_service::services::{CampusAssistant, CampusDirectory, LocalUploadStore, UploadStore};
use campus_service::startup::{build_router, AppState, Application};
use service_core::config::Config as CoreConfig;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

pub fn test_config(environment: Environment, upload_dir: &str) -> CampusConfig {
    CampusConfig {
        common: CoreConfig { port: 0 }, // Random port for testing
        environment,
        google: GoogleConfig {
            api_key: Some("test-api-key".to_string()),
            api_base: DEFAULT_GEMINI_API_BASE.to_string(),
        },
        models: ModelConfig {
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
        },
        storage: StorageConfig {
            upload_dir: upload_dir.to_string(),
        },
    }
}

pub fn unique_upload_dir() -> String {
    format!("target/test-uploads-{}", Uuid::new_v4())
}

/// Router wired like production but without a listener, for `oneshot` tests.
pub async fn test_router(provider: Arc<MockTextProvider>, upload_dir: &str) -> Router {
    let uploads = LocalUploadStore::new(upload_dir)
        .await
        .expect("Failed to create upload dir");

    router_with_store(provider, Arc::new(uploads), Environment::Development)
}

/// Same wiring with a caller-supplied upload store.
pub fn router_with_store(
    provider: Arc<MockTextProvider>,
    uploads: Arc<dyn UploadStore>,
    environment: Environment,
) -> Router {
    build_router(AppState {
        config: test_config(environment, "target/unused-uploads"),
        assistant: CampusAssistant::new(provider),
        directory: Arc::new(CampusDirectory::sample()),
        uploads,
        started_at: Instant::now(),
    })
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    pub provider: Arc<MockTextProvider>,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(MockTextProvider::new(MockOutcome::Echo), Environment::Development).await
    }

    pub async fn spawn_with(provider: MockTextProvider, environment: Environment) -> Self {
        let upload_dir = unique_upload_dir();
        let config = test_config(environment, &upload_dir);
        let provider = Arc::new(provider);

        let app = Application::build_with_provider(config, provider.clone())
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            upload_dir: PathBuf::from(upload_dir),
            provider,
            client,
        }
    }

    pub async fn post_chat(&self, body: serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}/api/chat", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub fn stored_files(&self) -> Vec<PathBuf> {
        std::fs::read_dir(&self.upload_dir)
            .map(|entries| entries.filter_map(|e| e.ok()).map(|e| e.path()).collect())
            .unwrap_or_default()
    }

    pub async fn cleanup(&self) {
        let _ = tokio::fs::remove_dir_all(&self.upload_dir).await;
    }
}

/// Hand-rolled multipart body for in-process requests.
pub fn multipart_body(
    field: &str,
    file_name: &str,
    content_type: &str,
    data: &[u8],
) -> (String, Vec<u8>) {
    let boundary = format!("campus-boundary-{}", Uuid::new_v4().simple());
    let mut body = Vec::with_capacity(data.len() + 256);
    body.extend_from_slice(
        format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
            boundary, field, file_name, content_type
        )
        .as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());

    (format!("multipart/form-data; boundary={}", boundary), body)
}
