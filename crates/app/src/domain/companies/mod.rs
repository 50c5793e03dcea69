//! Companies

pub mod data;
pub mod errors;
pub mod records;
pub mod repository;
pub mod service;

pub use errors::{CompaniesRepositoryError, CompaniesServiceError, ValidationError};
pub use service::*;
