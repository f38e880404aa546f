use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::model::user::{AdminStatus, User, ADMIN_ROLE};
use crate::model::write_result::{InsertOneOutcome, UpdateOutcome};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;

#[async_trait]
pub trait UserService: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
    async fn admin_status(&self, email: &str) -> Result<AdminStatus, ServiceError>;
    async fn register(&self, user: User) -> Result<InsertOneOutcome, ServiceError>;
    async fn save_profile(&self, user: User) -> Result<UpdateOutcome, ServiceError>;
    /// Promote `target` to Admin on behalf of the verified `requester`
    async fn grant_admin(&self, requester: &str, target: &str) -> Result<UpdateOutcome, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Roles only change through `grant_admin`
    fn strip_role(mut user: User) -> User {
        if let Some(role) = user.role.take() {
            warn!(email = %user.email, role = %role, "Ignoring client-supplied role");
        }
        user
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.user_repo.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn admin_status(&self, email: &str) -> Result<AdminStatus, ServiceError> {
        let user = self.user_repo.find_by_email(email).await?;
        let is_admin = user.as_ref().is_some_and(User::is_admin);
        Ok(AdminStatus { isAdmin: is_admin })
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn register(&self, user: User) -> Result<InsertOneOutcome, ServiceError> {
        info!("Registering user");
        Ok(self.user_repo.insert(Self::strip_role(user)).await?)
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn save_profile(&self, user: User) -> Result<UpdateOutcome, ServiceError> {
        Ok(self.user_repo.upsert_by_email(Self::strip_role(user)).await?)
    }

    // Requester lookup and target write are two separate store calls; a
    // demotion landing between them is not observed.
    #[instrument(skip(self))]
    async fn grant_admin(&self, requester: &str, target: &str) -> Result<UpdateOutcome, ServiceError> {
        let requester_acc = self.user_repo.find_by_email(requester).await?;
        if !requester_acc.as_ref().is_some_and(User::is_admin) {
            warn!("Admin grant refused: requester is not an admin");
            return Err(ServiceError::Forbidden(format!(
                "{} is not allowed to grant admin rights",
                requester
            )));
        }
        let result = self.user_repo.set_role(target, ADMIN_ROLE).await?;
        info!(matched = result.matched_count, "Admin role granted");
        Ok(result)
    }
}
