//! API server lifecycle: starts/stops the axum HTTP server.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel. `run()` keeps the handle until Ctrl-C.

use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::api::router::clinic_api_router;
use crate::core_state::CoreState;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind API server on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("Failed to get server address: {0}")]
    LocalAddr(std::io::Error),
}

/// Metadata for a running API server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSession {
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running API server.
pub struct ApiServer {
    pub session: ServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl ApiServer {
    /// Signal graceful shutdown. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }

    /// Wait for the server task to finish.
    pub async fn join(self) {
        if let Err(e) = self.task.await {
            tracing::error!("API server task failed: {e}");
        }
    }
}

/// Bind `addr`, mount `clinic_api_router`, and serve in a background task.
///
/// Port 0 picks an ephemeral port; the bound port is in the returned session.
pub async fn start_server_on(
    core: Arc<CoreState>,
    addr: SocketAddr,
) -> Result<ApiServer, ServerError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    let addr = listener.local_addr().map_err(ServerError::LocalAddr)?;

    let app = clinic_api_router(core);

    let session = ServerSession {
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("API server received shutdown signal");
        };

        tracing::info!(%addr, "API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("API server error: {e}");
        }

        tracing::info!("API server stopped");
    });

    Ok(ApiServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    use crate::config::AppConfig;

    fn test_core(dir: &std::path::Path) -> Arc<CoreState> {
        let core = CoreState::new(AppConfig {
            db_path: dir.join("clinic.db"),
            bind_addr: SocketAddr::from((Ipv4Addr::LOCALHOST, 0)),
            static_dir: dir.join("static"),
        });
        core.prepare_database().unwrap();
        Arc::new(core)
    }

    fn localhost() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
    }

    #[tokio::test]
    async fn start_serve_and_stop() {
        let tmp = tempfile::tempdir().unwrap();
        let mut server = start_server_on(test_core(tmp.path()), localhost())
            .await
            .expect("server should start");

        assert!(server.session.port > 0);
        assert!(!server.session.started_at.is_empty());

        let base = format!("http://127.0.0.1:{}", server.session.port);
        let client = reqwest::Client::new();

        let resp = client
            .post(format!("{base}/api/doctors"))
            .json(&serde_json::json!({
                "name": "Lee",
                "phone": "123",
                "email": "lee@clinic.test",
                "specialization": "GP"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::CREATED);

        let doctors: serde_json::Value = client
            .get(format!("{base}/api/doctors"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(doctors[0]["name"], "Lee");

        server.shutdown();
        server.join().await;
    }

    #[tokio::test]
    async fn missing_frontend_file_returns_404() {
        let tmp = tempfile::tempdir().unwrap();
        let mut server = start_server_on(test_core(tmp.path()), localhost())
            .await
            .unwrap();

        let resp = reqwest::get(format!("http://127.0.0.1:{}/", server.session.port))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let core = test_core(tmp.path());
        let mut first = start_server_on(core.clone(), localhost()).await.unwrap();
        let taken = SocketAddr::from((Ipv4Addr::LOCALHOST, first.session.port));

        let err = start_server_on(core, taken).await.err().unwrap();
        assert!(matches!(err, ServerError::Bind { .. }));

        first.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let mut server = start_server_on(test_core(tmp.path()), localhost())
            .await
            .unwrap();

        server.shutdown();
        server.shutdown(); // Second call should be safe
        server.join().await;
    }
}
