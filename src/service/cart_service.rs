use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::model::cart::Cart;
use crate::model::write_result::{DeleteOutcome, UpdateOutcome};
use crate::repository::cart_repo::CartRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait CartService: Send + Sync {
    async fn get_cart(&self, email: &str) -> Result<Option<Cart>, ServiceError>;
    async fn save_cart(&self, cart: Cart) -> Result<UpdateOutcome, ServiceError>;
    async fn clear_cart(&self, email: &str) -> Result<DeleteOutcome, ServiceError>;
}

pub struct CartServiceImpl {
    pub cart_repo: Arc<dyn CartRepository>,
}

impl CartServiceImpl {
    pub fn new(cart_repo: Arc<dyn CartRepository>) -> Self {
        Self { cart_repo }
    }
}

#[async_trait]
impl CartService for CartServiceImpl {
    async fn get_cart(&self, email: &str) -> Result<Option<Cart>, ServiceError> {
        Ok(self.cart_repo.find_by_email(email).await?)
    }

    #[instrument(skip(self, cart), fields(email = %cart.email))]
    async fn save_cart(&self, cart: Cart) -> Result<UpdateOutcome, ServiceError> {
        Ok(self.cart_repo.upsert_by_email(cart).await?)
    }

    #[instrument(skip(self))]
    async fn clear_cart(&self, email: &str) -> Result<DeleteOutcome, ServiceError> {
        Ok(self.cart_repo.delete_by_email(email).await?)
    }
}
