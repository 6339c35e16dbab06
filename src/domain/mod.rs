//! Persistence-agnostic entities and value objects.

pub mod access;
pub mod category;
pub mod product;
pub mod types;
pub mod upload;
pub mod venue;
