//! Ownership scoping for venue products.
//!
//! A product is addressed for owner-scoped reads and writes by the pair
//! `(product id, venue id)`. The pair is both the lookup key and the access
//! boundary: a key built for the wrong venue simply matches nothing, so
//! "belongs to another venue" and "does not exist" are indistinguishable.

use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::{ProductId, VenueId};

/// Composite key of a product scoped to its owning venue.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VenueProductKey {
    pub venue_id: VenueId,
    pub product_id: ProductId,
}

impl VenueProductKey {
    pub fn new(venue_id: VenueId, product_id: ProductId) -> Self {
        Self {
            venue_id,
            product_id,
        }
    }
}

/// Proof that a product was found under the caller's venue.
///
/// Only obtainable from a composite-key lookup that matched.
#[derive(Debug, Clone)]
pub struct ProductOwnership {
    key: VenueProductKey,
    product: Product,
}

impl ProductOwnership {
    /// Builds the token when `product` really belongs to the keyed venue.
    pub fn verify(key: VenueProductKey, product: Product) -> Option<Self> {
        (product.id == key.product_id && product.venue_id == key.venue_id)
            .then_some(Self { key, product })
    }

    pub fn key(&self) -> &VenueProductKey {
        &self.key
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn into_product(self) -> Product {
        self.product
    }
}
