use std::sync::Arc;

use async_trait::async_trait;
use bson::oid::ObjectId;
use tracing::{info, instrument};

use crate::dto::drone_dto::DroneForm;
use crate::model::drone::Drone;
use crate::model::write_result::{DeleteOutcome, InsertOneOutcome, UpdateOutcome};
use crate::repository::drone_repo::DroneRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait DroneService: Send + Sync {
    async fn list_drones(&self) -> Result<Vec<Drone>, ServiceError>;
    async fn get_drone(&self, id: ObjectId) -> Result<Option<Drone>, ServiceError>;
    async fn create_drone(&self, form: DroneForm) -> Result<InsertOneOutcome, ServiceError>;
    async fn replace_drone(&self, id: ObjectId, form: DroneForm) -> Result<UpdateOutcome, ServiceError>;
    async fn delete_drone(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError>;
}

pub struct DroneServiceImpl {
    pub drone_repo: Arc<dyn DroneRepository>,
}

impl DroneServiceImpl {
    pub fn new(drone_repo: Arc<dyn DroneRepository>) -> Self {
        Self { drone_repo }
    }
}

#[async_trait]
impl DroneService for DroneServiceImpl {
    async fn list_drones(&self) -> Result<Vec<Drone>, ServiceError> {
        Ok(self.drone_repo.find_all().await?)
    }

    async fn get_drone(&self, id: ObjectId) -> Result<Option<Drone>, ServiceError> {
        Ok(self.drone_repo.find_by_id(id).await?)
    }

    #[instrument(skip(self, form), fields(name = %form.name, img_bytes = form.img.len()))]
    async fn create_drone(&self, form: DroneForm) -> Result<InsertOneOutcome, ServiceError> {
        info!("Creating drone");
        Ok(self.drone_repo.insert(form.into()).await?)
    }

    #[instrument(skip(self, form), fields(id = %id))]
    async fn replace_drone(&self, id: ObjectId, form: DroneForm) -> Result<UpdateOutcome, ServiceError> {
        Ok(self.drone_repo.replace_fields(id, form.into()).await?)
    }

    async fn delete_drone(&self, id: ObjectId) -> Result<DeleteOutcome, ServiceError> {
        Ok(self.drone_repo.delete(id).await?)
    }
}
