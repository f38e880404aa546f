use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};
use tracing::{error, info};

use crate::model::drone::Drone;
use crate::model::write_result::{DeleteOutcome, InsertOneOutcome, UpdateOutcome};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::{collect_all, DRONES_COLLECTION};

#[async_trait]
pub trait DroneRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<Drone>>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Drone>>;
    async fn insert(&self, drone: Drone) -> RepositoryResult<InsertOneOutcome>;
    /// Overwrite name, description, price and img of the drone `id`
    async fn replace_fields(&self, id: ObjectId, drone: Drone) -> RepositoryResult<UpdateOutcome>;
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome>;
}

pub struct MongoDroneRepository {
    collection: Collection<Drone>,
}

impl MongoDroneRepository {
    pub fn new(db: &Database) -> Self {
        MongoDroneRepository { collection: db.collection::<Drone>(DRONES_COLLECTION) }
    }
}

#[async_trait]
impl DroneRepository for MongoDroneRepository {
    #[tracing::instrument(skip(self))]
    async fn find_all(&self) -> RepositoryResult<Vec<Drone>> {
        let cursor = self.collection.find(None, None).await?;
        let drones = collect_all(cursor).await?;
        info!("Fetched {} drones", drones.len());
        Ok(drones)
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<Drone>> {
        let drone = self.collection.find_one(doc! { "_id": id }, None).await?;
        if drone.is_none() {
            info!("No drone stored under this id");
        }
        Ok(drone)
    }

    #[tracing::instrument(skip(self, drone), fields(name = %drone.name, img_bytes = drone.img.bytes.len()))]
    async fn insert(&self, drone: Drone) -> RepositoryResult<InsertOneOutcome> {
        let result = self.collection.insert_one(&drone, None).await.map_err(|e| {
            error!("Failed to insert drone: {}", e);
            RepositoryError::from(e)
        })?;
        info!("Drone created");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self, drone), fields(id = %id))]
    async fn replace_fields(&self, id: ObjectId, drone: Drone) -> RepositoryResult<UpdateOutcome> {
        let mut fields = bson::to_document(&drone)?;
        fields.remove("_id");
        let result = self
            .collection
            .update_one(doc! { "_id": id }, doc! { "$set": fields }, None)
            .await
            .map_err(|e| {
                error!("Failed to update drone: {}", e);
                RepositoryError::from(e)
            })?;
        info!(matched = result.matched_count, modified = result.modified_count, "Drone updated");
        Ok(result.into())
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: ObjectId) -> RepositoryResult<DeleteOutcome> {
        let result = self.collection.delete_one(doc! { "_id": id }, None).await?;
        info!(deleted = result.deleted_count, "Drone delete finished");
        Ok(result.into())
    }
}
