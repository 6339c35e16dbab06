use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::db::{DbConnection, DbPool};
use crate::domain::access::VenueProductKey;
use crate::domain::category::Category;
use crate::domain::product::{NewProduct, Product, ProductDetails};
use crate::domain::types::{CategoryType, ProductId, SubjectId, VenueEmail, VenueId};
use crate::domain::venue::VenueProfile;

pub mod category;
pub mod errors;
pub mod product;
pub mod venue;

use errors::RepositoryResult;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Precondition attached to product creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CreateGuard {
    /// Reject only when the freshly generated product key is already taken.
    /// Keys are random, so venues can own any number of products.
    #[default]
    ProductKey,
    /// Reject when the venue already owns a product.
    OnePerVenue,
}

/// Outcome of deleting a composite key that matches nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeletePolicy {
    /// A miss is reported as not found, like update.
    #[default]
    Strict,
    /// Delete-if-present: a miss still succeeds.
    Lenient,
}

/// Lookup of venue operator profiles.
pub trait VenueReader {
    /// Fetch the profile keyed by operator email and identity subject.
    fn get_venue_by_identity(
        &self,
        email: &VenueEmail,
        subject: &SubjectId,
    ) -> RepositoryResult<Option<VenueProfile>>;
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// Retrieve an active product by id alone.
    fn get_active_product(&self, id: &ProductId) -> RepositoryResult<Option<Product>>;
    /// List every product of a venue through the venue index.
    fn list_venue_products(&self, venue_id: &VenueId) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its venue-scoped composite key.
    fn get_venue_product(&self, key: &VenueProductKey) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
///
/// Every write is addressed by the composite key so a mismatched venue never
/// touches another venue's row.
pub trait ProductWriter {
    /// Insert a product under the given guard, failing with `AlreadyExists`
    /// when the guard trips.
    fn create_product(&self, product: &NewProduct, guard: CreateGuard)
    -> RepositoryResult<Product>;
    /// Replace all mutable attributes, returning the stored row or `None`
    /// when the key matched nothing.
    fn update_product(
        &self,
        key: &VenueProductKey,
        details: &ProductDetails,
        updated_at: NaiveDateTime,
    ) -> RepositoryResult<Option<Product>>;
    /// Delete by composite key, returning the number of removed rows.
    fn delete_product(&self, key: &VenueProductKey) -> RepositoryResult<usize>;
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List categories of one type through the type index, in store order.
    fn list_categories_by_type(
        &self,
        category_type: CategoryType,
    ) -> RepositoryResult<Vec<Category>>;
}
