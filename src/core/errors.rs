use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Serialize)]
pub enum SplitbaseError {
    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(String),

    /// User ID is already taken
    #[error("User {0} already registered")]
    UserAlreadyRegistered(String),

    /// Group with given ID not found
    #[error("Group {0} not found")]
    GroupNotFound(String),

    /// User is not a member of the group
    #[error("User {0} is not a group member")]
    NotGroupMember(String),

    /// Split participant is not a member of the group
    #[error("Invalid split user: {0}")]
    InvalidSplitUser(String),

    /// Split set is empty or otherwise unusable
    #[error("Invalid split")]
    InvalidSplit,

    /// Settlement with given ID not found
    #[error("Settlement {0} not found")]
    SettlementNotFound(String),

    /// Settlement has already been completed or failed
    #[error("Settlement {0} already resolved")]
    SettlementAlreadyResolved(String),

    /// Cannot create a settlement from a user to themselves
    #[error("Cannot create settlement to self")]
    SelfSettlement,

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Storage operation failed
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Logging operation failed
    #[error("Logging error: {0}")]
    LoggingError(String),

    /// Cache operation failed
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Internal server error (e.g., unexpected failure)
    #[error("Internal server error: {0}")]
    InternalServerError(String),
}
