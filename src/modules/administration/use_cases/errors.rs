use crate::shared::infrastructure::repository::RepositoryError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("{}", .0.join("\n"))]
    Validation(Vec<String>),

    #[error("role with id {0} does not exist")]
    UnknownRole(Uuid),
}
