pub mod error;
pub mod formatters;
pub mod logger;
pub mod validation;
