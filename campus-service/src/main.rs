use campus_service::config::CampusConfig;
use campus_service::startup::Application;
use service_core::observability::init_tracing;

fn log_banner(config: &CampusConfig, port: u16) {
    let ai_status = if config.ai_ready() {
        "CONNECTED"
    } else {
        "NOT CONFIGURED"
    };

    tracing::info!(
        port,
        environment = config.environment.as_str(),
        ai_status,
        upload_dir = %config.storage.upload_dir,
        started = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "CampusGPT backend server started; PDF upload ready"
    );

    if !config.ai_ready() {
        tracing::warn!(
            "Google API key not found: add GOOGLE_API_KEY to your environment \
             (free key from https://aistudio.google.com/); chat replies will carry setup instructions"
        );
    }

    tracing::info!(
        local = %format!("http://localhost:{}", port),
        health = %format!("http://localhost:{}/api/health", port),
        "Test the server"
    );
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    init_tracing("campus-service", "info");

    let config = CampusConfig::load().map_err(|e| {
        tracing::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration error: {}", e))
    })?;

    let app = Application::build(config.clone()).await.map_err(|e| {
        tracing::error!("Failed to build application: {}", e);
        std::io::Error::other(format!("Startup error: {}", e))
    })?;

    log_banner(&config, app.port());

    app.run_until_stopped().await
}
