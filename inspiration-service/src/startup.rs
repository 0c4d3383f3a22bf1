use crate::config::InspirationConfig;
use crate::handlers;
use crate::services::{DocumentStore, MongoStore};
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: InspirationConfig,
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    /// The store handle is optional; every dependent handler goes through
    /// here and turns its absence into a reportable error.
    pub fn store(&self) -> Result<&Arc<dyn DocumentStore>, AppError> {
        self.store.as_ref().ok_or(AppError::StoreUnavailable)
    }
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Initializes the store from configuration. A missing DATABASE_URL
    /// or a client that cannot be built leaves the store unavailable; the
    /// HTTP surface still comes up.
    pub async fn build(config: InspirationConfig) -> Result<Self, AppError> {
        let store = match &config.database.url {
            Some(url) => match MongoStore::connect(url, config.database.database_name()).await {
                Ok(store) => Some(Arc::new(store) as Arc<dyn DocumentStore>),
                Err(e) => {
                    tracing::warn!("Failed to initialize document store: {}", e);
                    None
                }
            },
            None => {
                tracing::warn!("DATABASE_URL is not set; running without a document store");
                None
            }
        };

        Self::build_with_store(config, store).await
    }

    pub async fn build_with_store(
        config: InspirationConfig,
        store: Option<Arc<dyn DocumentStore>>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            store,
        };

        let app = router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn router(state: AppState) -> Router {
    // Any origin, any method, any headers, credentials allowed. The CORS
    // layer rejects literal wildcards combined with credentials, so the
    // request's own values are mirrored back instead.
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true);

    Router::new()
        .route("/", get(handlers::root))
        .route("/api/hello", get(handlers::hello))
        .route("/test", get(handlers::diagnostics))
        .route(
            "/api/quotes",
            post(handlers::create_quote).get(handlers::list_quotes),
        )
        .route("/api/quotes/random", get(handlers::random_quote))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
