use async_trait::async_trait;
use bson::doc;
use mongodb::options::UpdateOptions;
use mongodb::{Collection, Database};
use tracing::{error, info};

use crate::model::user::User;
use crate::model::write_result::{InsertOneOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::{collect_all, USERS_COLLECTION};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn insert(&self, user: User) -> RepositoryResult<InsertOneOutcome>;
    /// `$set` every submitted field on the user matching `user.email`, creating it if absent
    async fn upsert_by_email(&self, user: User) -> RepositoryResult<UpdateOutcome>;
    async fn set_role(&self, email: &str, role: &str) -> RepositoryResult<UpdateOutcome>;
}

pub struct UserRepositoryImpl {
    collection: Collection<User>,
}

impl UserRepositoryImpl {
    pub fn new(db: &Database) -> Self {
        UserRepositoryImpl { collection: db.collection::<User>(USERS_COLLECTION) }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let cursor = self.collection.find(None, None).await?;
        let users = collect_all(cursor).await?;
        info!("Fetched {} users", users.len());
        Ok(users)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let filter = doc! { "email": email };
        self.collection.find_one(filter, None).await.map_err(|e| {
            error!("Failed to find user by email: {}", e);
            RepositoryError::from(e)
        })
    }

    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    async fn insert(&self, user: User) -> RepositoryResult<InsertOneOutcome> {
        let result = self.collection.insert_one(&user, None).await.map_err(|e| {
            error!("Failed to insert user: {}", e);
            RepositoryError::from(e)
        })?;
        info!("User inserted");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self, user), fields(email = %user.email))]
    async fn upsert_by_email(&self, user: User) -> RepositoryResult<UpdateOutcome> {
        let filter = doc! { "email": &user.email };
        let mut fields = bson::to_document(&user)?;
        fields.remove("_id");
        let options = UpdateOptions::builder().upsert(true).build();
        let result = self
            .collection
            .update_one(filter, doc! { "$set": fields }, options)
            .await?;
        info!(matched = result.matched_count, upserted = result.upserted_id.is_some(), "User upserted");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self))]
    async fn set_role(&self, email: &str, role: &str) -> RepositoryResult<UpdateOutcome> {
        let filter = doc! { "email": email };
        let result = self
            .collection
            .update_one(filter, doc! { "$set": { "role": role } }, None)
            .await?;
        info!(matched = result.matched_count, "User role updated");
        Ok(result.into())
    }
}
