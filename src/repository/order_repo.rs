use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use tracing::{error, info};

use crate::model::order::Order;
use crate::model::write_result::{DeleteOutcome, InsertManyOutcome, InsertOneOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::{collect_all, ORDERS_COLLECTION};

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// All orders, or only those placed by `email`
    async fn find(&self, email: Option<&str>) -> RepositoryResult<Vec<Order>>;
    async fn insert_one(&self, order: Order) -> RepositoryResult<InsertOneOutcome>;
    async fn insert_many(&self, orders: Vec<Order>) -> RepositoryResult<InsertManyOutcome>;
    async fn update_status(&self, id: ObjectId, status: &str) -> RepositoryResult<UpdateOutcome>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;
}

pub struct MongoOrderRepository {
    collection: Collection<Order>,
}

impl MongoOrderRepository {
    pub fn new(db: &Database) -> Self {
        MongoOrderRepository { collection: db.collection::<Order>(ORDERS_COLLECTION) }
    }
}

#[async_trait]
impl OrderRepository for MongoOrderRepository {
    #[tracing::instrument(skip(self))]
    async fn find(&self, email: Option<&str>) -> RepositoryResult<Vec<Order>> {
        let filter = email.map(|email| doc! { "email": email });
        let cursor = self.collection.find(filter, None).await?;
        let orders = collect_all(cursor).await?;
        info!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    #[tracing::instrument(skip(self, order))]
    async fn insert_one(&self, order: Order) -> RepositoryResult<InsertOneOutcome> {
        let result = self.collection.insert_one(&order, None).await.map_err(|e| {
            error!("Failed to insert order: {}", e);
            RepositoryError::from(e)
        })?;
        info!("Order created");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self, orders), fields(count = orders.len()))]
    async fn insert_many(&self, orders: Vec<Order>) -> RepositoryResult<InsertManyOutcome> {
        let result = self.collection.insert_many(&orders, None).await.map_err(|e| {
            error!("Failed to insert order batch: {}", e);
            RepositoryError::from(e)
        })?;
        info!("Inserted {} orders", result.inserted_ids.len());
        Ok(result.into())
    }

    #[tracing::instrument(skip(self), fields(id = %id, status = %status))]
    async fn update_status(&self, id: ObjectId, status: &str) -> RepositoryResult<UpdateOutcome> {
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": { "status": status } }, None)
            .await?;
        info!(matched = result.matched_count, "Order status updated");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        info!(deleted = result.deleted_count, "Order delete finished");
        Ok(result.into())
    }
}
