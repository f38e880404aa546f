use async_trait::async_trait;
use mongodb::{Collection, Database};
use tracing::info;

use crate::model::review::Review;
use crate::model::write_result::InsertOneOutcome;
use crate::repository::repository_error::RepositoryResult;
use crate::repository::{collect_all, REVIEWS_COLLECTION};

/// Reviews are append-only: there is no update or delete.
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Review>>;
    async fn insert(&self, review: Review) -> RepositoryResult<InsertOneOutcome>;
}

pub struct MongoReviewRepository {
    collection: Collection<Review>,
}

impl MongoReviewRepository {
    pub fn new(db: &Database) -> Self {
        MongoReviewRepository { collection: db.collection::<Review>(REVIEWS_COLLECTION) }
    }
}

#[async_trait]
impl ReviewRepository for MongoReviewRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Review>> {
        let reviews = collect_all(self.collection.find(None, None).await?).await?;
        info!("Fetched {} reviews", reviews.len());
        Ok(reviews)
    }

    async fn insert(&self, review: Review) -> RepositoryResult<InsertOneOutcome> {
        let result = self.collection.insert_one(&review, None).await?;
        info!("Review stored");
        Ok(result.into())
    }
}
