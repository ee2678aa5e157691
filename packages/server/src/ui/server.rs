//! Server execution logic.

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::usecase::GameCoordinator;

use super::{
    dispatcher::spawn_dispatcher,
    handler::{health_check, login_page, room_page, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Synonym Sleuth server
///
/// # Example
///
/// ```ignore
/// let server = Server::new(coordinator, PathBuf::from("public"));
/// server.run("0.0.0.0".to_string(), 3000).await?;
/// ```
pub struct Server {
    coordinator: GameCoordinator,
    static_dir: PathBuf,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `coordinator` - Game coordinator handling every connection event
    /// * `static_dir` - Directory holding `login.html`, `room.html` and other static assets
    pub fn new(coordinator: GameCoordinator, static_dir: PathBuf) -> Self {
        Self {
            coordinator,
            static_dir,
        }
    }

    /// Build the router and start the event dispatcher.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn into_router(self) -> Router {
        let (dispatcher, _dispatcher_handle) = spawn_dispatcher(self.coordinator);
        let app_state = Arc::new(AppState {
            dispatcher,
            static_dir: self.static_dir.clone(),
        });

        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/", get(room_page))
            .route("/login", get(login_page))
            .route("/api/health", get(health_check))
            .fallback_service(ServeDir::new(self.static_dir))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the server until Ctrl+C / SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.into_router();

        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

        tracing::info!(
            "Synonym Sleuth server listening on http://{}",
            listener.local_addr()?
        );
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
