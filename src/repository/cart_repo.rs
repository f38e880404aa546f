use async_trait::async_trait;
use bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::{Collection, Database};
use tracing::info;

use crate::model::cart::Cart;
use crate::model::write_result::{DeleteOutcome, UpdateOutcome};
use crate::repository::repository_error::RepositoryResult;
use crate::repository::CART_COLLECTION;

#[async_trait]
pub trait CartRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Cart>>;
    /// `$set` the submitted cart on the document matching `cart.email`, creating it if absent
    async fn upsert_by_email(&self, cart: Cart) -> RepositoryResult<UpdateOutcome>;
    /// Removes every cart stored for `email`, duplicates included
    async fn delete_by_email(&self, email: &str) -> RepositoryResult<DeleteOutcome>;
}

pub struct MongoCartRepository {
    collection: Collection<Cart>,
}

impl MongoCartRepository {
    pub fn new(db: &Database) -> Self {
        MongoCartRepository { collection: db.collection::<Cart>(CART_COLLECTION) }
    }
}

#[async_trait]
impl CartRepository for MongoCartRepository {
    #[tracing::instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Cart>> {
        Ok(self.collection.find_one(doc! { "email": email }, None).await?)
    }

    #[tracing::instrument(skip(self, cart), fields(email = %cart.email))]
    async fn upsert_by_email(&self, cart: Cart) -> RepositoryResult<UpdateOutcome> {
        let filter = doc! { "email": &cart.email };
        let mut fields = bson::to_document(&cart)?;
        fields.remove("_id");
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .collection
            .update_one(filter, doc! { "$set": fields }, options)
            .await?;
        info!(matched = result.matched_count, upserted = result.upserted_id.is_some(), "Cart saved");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self))]
    async fn delete_by_email(&self, email: &str) -> RepositoryResult<DeleteOutcome> {
        let result = self.collection.delete_many(doc! { "email": email }, None).await?;
        info!(deleted = result.deleted_count, "Cart cleared");
        Ok(result.into())
    }
}
