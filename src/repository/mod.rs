pub mod cart_repo;
pub mod drone_repo;
pub mod order_repo;
pub mod repository_error;
pub mod review_repo;
pub mod user_repo;

use std::time::Duration;

use futures::stream::TryStreamExt;
use mongodb::options::{ClientOptions, Credential, ResolverConfig};
use mongodb::{Client, Cursor, Database};
use serde::de::DeserializeOwned;
use tracing::info;

use crate::config::mongo_conf::MongoConfig;
use crate::repository::repository_error::RepositoryResult;

pub const USERS_COLLECTION: &str = "Users";
pub const DRONES_COLLECTION: &str = "Drones";
pub const ORDERS_COLLECTION: &str = "Orders";
pub const REVIEWS_COLLECTION: &str = "Reviews";
pub const CART_COLLECTION: &str = "cart";

/// Build the single pooled client every repository shares.
///
/// The driver connects lazily; the first operation surfaces
/// unreachable-server errors.
pub async fn connect(config: &MongoConfig) -> Result<Database, mongodb::error::Error> {
    let mut client_options =
        ClientOptions::parse_with_resolver_config(&config.uri, ResolverConfig::cloudflare()).await?;
    client_options.app_name = Some("DroneShopBackend".to_string());
    client_options.max_pool_size = Some(config.pool_size);
    client_options.connect_timeout = Some(Duration::from_secs(config.connection_timeout_secs));

    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        client_options.credential = Some(
            Credential::builder()
                .username(username.clone())
                .password(password.clone())
                .build(),
        );
    }

    let client = Client::with_options(client_options)?;
    info!(database = %config.database, "MongoDB client initialised");
    Ok(client.database(&config.database))
}

pub(crate) async fn collect_all<T>(cursor: Cursor<T>) -> RepositoryResult<Vec<T>>
where
    T: DeserializeOwned + Unpin + Send + Sync,
{
    Ok(cursor.try_collect().await?)
}
