use std::sync::Arc;

use axum::{routing::get, Router};
use mongodb::Database;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use crate::config::{AppConfig, ConfigError, JwtConfig, MongoConfig};
use crate::handler::health_handler::{health_handler, root_handler};
use crate::repository::cart_repo::MongoCartRepository;
use crate::repository::drone_repo::MongoDroneRepository;
use crate::repository::order_repo::MongoOrderRepository;
use crate::repository::review_repo::MongoReviewRepository;
use crate::repository::user_repo::UserRepositoryImpl;
use crate::router::cart_router::cart_router;
use crate::router::drone_router::drone_router;
use crate::router::order_router::order_router;
use crate::router::review_router::review_router;
use crate::router::user_router::user_router;
use crate::service::cart_service::CartServiceImpl;
use crate::service::drone_service::DroneServiceImpl;
use crate::service::order_service::OrderServiceImpl;
use crate::service::review_service::ReviewServiceImpl;
use crate::service::user_service::UserServiceImpl;
use crate::util::jwt::{JwtTokenVerifier, TokenVerifier};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// One service per collection, all backed by the same store handle
#[derive(Clone)]
pub struct Services {
    pub users: Arc<UserServiceImpl>,
    pub drones: Arc<DroneServiceImpl>,
    pub orders: Arc<OrderServiceImpl>,
    pub carts: Arc<CartServiceImpl>,
    pub reviews: Arc<ReviewServiceImpl>,
}

impl Services {
    pub fn from_database(db: &Database) -> Self {
        Services {
            users: Arc::new(UserServiceImpl::new(Arc::new(UserRepositoryImpl::new(db)))),
            drones: Arc::new(DroneServiceImpl::new(Arc::new(MongoDroneRepository::new(db)))),
            orders: Arc::new(OrderServiceImpl::new(Arc::new(MongoOrderRepository::new(db)))),
            carts: Arc::new(CartServiceImpl::new(Arc::new(MongoCartRepository::new(db)))),
            reviews: Arc::new(ReviewServiceImpl::new(Arc::new(MongoReviewRepository::new(db)))),
        }
    }
}

/// Full route table with CORS and request tracing
pub fn create_router(services: Services, verifier: Arc<dyn TokenVerifier>, max_upload_bytes: usize) -> Router {
    Router::new()
        .merge(user_router(services.users, verifier))
        .merge(drone_router(services.drones, max_upload_bytes))
        .merge(order_router(services.orders))
        .merge(cart_router(services.carts))
        .merge(review_router(services.reviews))
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub struct App {
    config: AppConfig,
    router: Router,
}

impl App {
    pub async fn new() -> Result<Self, AppError> {
        let config = AppConfig::from_env()?;
        let mongo_config = MongoConfig::from_env()?;
        let jwt_config = JwtConfig::from_env()?;

        let db = crate::repository::connect(&mongo_config).await?;
        let services = Services::from_database(&db);
        let verifier: Arc<dyn TokenVerifier> = Arc::new(JwtTokenVerifier::new(jwt_config));

        let router = create_router(services, verifier, config.max_upload_bytes);
        Ok(App { config, router })
    }

    pub async fn start(self) -> Result<(), AppError> {
        let addr = self.config.socket_addr()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => warn!("Failed to listen for shutdown signal: {}", e),
    }
}
