use mongodb::error::ErrorKind;

/// Store failures, classified by how the service layer reacts to them
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Duplicate key: {0}")]
    AlreadyExists(String),
    #[error("Invalid argument: {0}")]
    ValidationError(String),
    #[error("Write error: {0}")]
    DatabaseError(String),
    #[error("Store unreachable: {0}")]
    ConnectionError(String),
    #[error("BSON error: {0}")]
    SerializationError(String),
    /// Driver error with no more specific mapping
    #[error("Store error: {0}")]
    Generic(#[source] mongodb::error::Error),
}

impl From<mongodb::error::Error> for RepositoryError {
    fn from(err: mongodb::error::Error) -> Self {
        let mapped = match err.kind.as_ref() {
            // Duplicate keys only show up as server code E11000
            ErrorKind::Write(_) | ErrorKind::BulkWrite(_) if err.to_string().contains("E11000") => {
                Some(RepositoryError::AlreadyExists(err.to_string()))
            }
            ErrorKind::Write(_) | ErrorKind::BulkWrite(_) => Some(RepositoryError::DatabaseError(err.to_string())),
            ErrorKind::Authentication { .. } | ErrorKind::Io(_) | ErrorKind::ServerSelection { .. } => {
                Some(RepositoryError::ConnectionError(err.to_string()))
            }
            ErrorKind::InvalidArgument { .. } => Some(RepositoryError::ValidationError(err.to_string())),
            ErrorKind::BsonDeserialization(_) | ErrorKind::BsonSerialization(_) => {
                Some(RepositoryError::SerializationError(err.to_string()))
            }
            _ => None,
        };
        mapped.unwrap_or_else(|| RepositoryError::Generic(err))
    }
}

impl From<bson::ser::Error> for RepositoryError {
    fn from(err: bson::ser::Error) -> Self {
        RepositoryError::SerializationError(err.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
