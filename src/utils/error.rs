use thiserror::Error;

#[derive(Error, Debug)]
pub enum GymError {
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("{entity} already registered: {key}")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Class {class_id} is full (capacity {capacity})")]
    CapacityExceeded { class_id: u32, capacity: u32 },

    #[error("Member {national_id} is already enrolled in class {class_id}")]
    DuplicateEnrollment { class_id: u32, national_id: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GymError>;
