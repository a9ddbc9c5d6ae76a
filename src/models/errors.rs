use thiserror::Error;

/// Errors raised by name lookups against the directory.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Restaurant not found: {name}")]
    RestaurantNotFound { name: String },

    #[error("Menu item not found: {name}")]
    ItemNotFound { name: String },
}

/// Result type alias for directory operations
pub type ServiceResult<T> = Result<T, ServiceError>;
