use std::sync::Arc;

use async_trait::async_trait;

use crate::model::review::Review;
use crate::model::write_result::InsertOneOutcome;
use crate::repository::review_repo::ReviewRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn list_reviews(&self) -> Result<Vec<Review>, ServiceError>;
    async fn add_review(&self, review: Review) -> Result<InsertOneOutcome, ServiceError>;
}

pub struct ReviewServiceImpl {
    pub review_repo: Arc<dyn ReviewRepository>,
}

impl ReviewServiceImpl {
    pub fn new(review_repo: Arc<dyn ReviewRepository>) -> Self {
        Self { review_repo }
    }
}

#[async_trait]
impl ReviewService for ReviewServiceImpl {
    async fn list_reviews(&self) -> Result<Vec<Review>, ServiceError> {
        Ok(self.review_repo.find_all().await?)
    }

    async fn add_review(&self, mut review: Review) -> Result<InsertOneOutcome, ServiceError> {
        // Reviews are append-only; a client-chosen _id is not honoured
        review.id = None;
        Ok(self.review_repo.insert(review).await?)
    }
}
