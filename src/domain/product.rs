use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ImageRef, ProductCategory, ProductDescription, ProductId, ProductName, ProductPrice,
    ProteinType, VenueId,
};

/// A sellable item owned by exactly one venue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub venue_id: VenueId,
    #[serde(flatten)]
    pub details: ProductDetails,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// The mutable attributes of a [`Product`].
///
/// Updates replace all of these at once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub name: ProductName,
    pub description: Option<ProductDescription>,
    pub price: ProductPrice,
    pub category: ProductCategory,
    pub images: Vec<ImageRef>,
    pub protein_type: ProteinType,
    pub is_active: bool,
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub id: ProductId,
    pub venue_id: VenueId,
    pub details: ProductDetails,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Stamps a fresh identifier and equal creation/update timestamps.
    pub fn new(venue_id: VenueId, details: ProductDetails, now: NaiveDateTime) -> Self {
        Self {
            id: ProductId::generate(),
            venue_id,
            details,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<NewProduct> for Product {
    fn from(product: NewProduct) -> Self {
        Self {
            id: product.id,
            venue_id: product.venue_id,
            details: product.details,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
