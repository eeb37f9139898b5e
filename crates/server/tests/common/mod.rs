//! # Common Test Utilities
//!
//! `TestApp` spawns the real router on a random port. Its configuration is
//! written to a temporary `config.yml` whose `invoke` provider points at an
//! `httpmock::MockServer`, so every generation call can be scripted.

// Not every test file uses every helper.
#![allow(unused)]

use anycopy_server::{config, router, state::build_app_state};
use anyhow::Result;
use axum::serve;
use httpmock::MockServer;
use reqwest::Client;
use std::{fs::File, io::Write, net::SocketAddr};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// The path the mock generation service listens on.
pub const INVOKE_PATH: &str = "/invoke";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _config_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server with the default configuration.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_yaml("").await
    }

    /// Spawns the application server, appending `extra_yaml` to the generated
    /// configuration (e.g. a `generators:` override block).
    pub async fn spawn_with_yaml(extra_yaml: &str) -> Result<Self> {
        dotenvy::dotenv().ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();

        let config_dir = tempdir()?;
        let config_path = config_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
provider:
  provider: "invoke"
  api_url: "{}"
{}
"#,
            mock_server.url(INVOKE_PATH),
            extra_yaml
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let config = config::get_config(Some(config_path.to_str().unwrap()))?;
        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = router::create_router(app_state);
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _config_dir: config_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts a generation request for `slug`.
    pub async fn generate(
        &self,
        slug: &str,
        body: serde_json::Value,
    ) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(format!("{}/generate/{slug}", self.address))
            .json(&body)
            .send()
            .await
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
