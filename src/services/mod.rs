//! Framework-free business logic. Routes stay thin wrappers around these.

pub mod access;
pub mod categories;
pub mod errors;
pub mod identity;
pub mod products;
pub mod upload;

pub use errors::{ServiceError, ServiceResult};
