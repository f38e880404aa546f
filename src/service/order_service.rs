use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::order_dto::{OrderSubmission, PlacedOrders};
use crate::model::order::Order;
use crate::model::write_result::{DeleteOutcome, UpdateOutcome};
use crate::repository::order_repo::OrderRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait OrderService: Send + Sync {
    async fn list_orders(&self, email: Option<&str>) -> Result<Vec<Order>, ServiceError>;
    async fn place_orders(&self, submission: OrderSubmission) -> Result<PlacedOrders, ServiceError>;
    async fn update_status(&self, id: ObjectId, status: &str) -> Result<UpdateOutcome, ServiceError>;
    async fn delete_order(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError>;
}

pub struct OrderServiceImpl {
    pub order_repo: Arc<dyn OrderRepository>,
}

impl OrderServiceImpl {
    pub fn new(order_repo: Arc<dyn OrderRepository>) -> Self {
        Self { order_repo }
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    #[instrument(skip(self))]
    async fn list_orders(&self, email: Option<&str>) -> Result<Vec<Order>, ServiceError> {
        Ok(self.order_repo.find(email).await?)
    }

    // A batch is one insert_many call; documents written before a failure stay written.
    async fn place_orders(&self, submission: OrderSubmission) -> Result<PlacedOrders, ServiceError> {
        match submission {
            OrderSubmission::Many(orders) if orders.is_empty() => {
                Err(ServiceError::InvalidInput("Order batch is empty".to_string()))
            }
            OrderSubmission::Many(orders) => {
                info!(count = orders.len(), "Placing order batch");
                Ok(PlacedOrders::Many(self.order_repo.insert_many(orders).await?))
            }
            OrderSubmission::One(order) => {
                info!("Placing single order");
                Ok(PlacedOrders::One(self.order_repo.insert_one(order).await?))
            }
        }
    }

    #[instrument(skip(self), fields(id = %id))]
    async fn update_status(&self, id: ObjectId, status: &str) -> Result<UpdateOutcome, ServiceError> {
        Ok(self.order_repo.update_status(id, status).await?)
    }

    async fn delete_order(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError> {
        Ok(self.order_repo.delete(id).await?)
    }
}
