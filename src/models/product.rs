use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductDetails,
};
use crate::domain::types::{
    ImageRef, ProductCategory, ProductDescription, ProductId, ProductName, ProductPrice,
    ProteinType, VenueId,
};
use crate::repository::errors::RepositoryError;

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    /// JSON array of image references, order preserved.
    pub images: String,
    pub protein_type: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub id: String,
    pub venue_id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub images: String,
    pub protein_type: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement of the mutable columns; `None` clears the description.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products, treat_none_as_null = true)]
pub struct ProductChanges {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub images: String,
    pub protein_type: String,
    pub is_active: bool,
    pub updated_at: NaiveDateTime,
}

fn encode_images(images: &[ImageRef]) -> Result<String, RepositoryError> {
    Ok(serde_json::to_string(images)?)
}

impl TryFrom<Product> for DomainProduct {
    type Error = RepositoryError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let images: Vec<String> = serde_json::from_str(&product.images)?;
        Ok(Self {
            id: ProductId::new(product.id)?,
            venue_id: VenueId::new(product.venue_id)?,
            details: ProductDetails {
                name: ProductName::new(product.name)?,
                description: product
                    .description
                    .map(ProductDescription::new)
                    .transpose()?,
                price: ProductPrice::new(product.price)?,
                category: ProductCategory::try_from(product.category)?,
                images: images
                    .into_iter()
                    .map(ImageRef::new)
                    .collect::<Result<_, _>>()?,
                protein_type: ProteinType::new(product.protein_type)?,
                is_active: product.is_active,
            },
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl TryFrom<&DomainNewProduct> for NewProduct {
    type Error = RepositoryError;

    fn try_from(product: &DomainNewProduct) -> Result<Self, Self::Error> {
        let details = &product.details;
        Ok(Self {
            id: product.id.as_str().to_string(),
            venue_id: product.venue_id.as_str().to_string(),
            name: details.name.as_str().to_string(),
            description: details
                .description
                .as_ref()
                .map(|d| d.as_str().to_string()),
            price: details.price.get(),
            category: details.category.as_str().to_string(),
            images: encode_images(&details.images)?,
            protein_type: details.protein_type.as_str().to_string(),
            is_active: details.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl ProductChanges {
    pub fn replace_with(
        details: &ProductDetails,
        updated_at: NaiveDateTime,
    ) -> Result<Self, RepositoryError> {
        Ok(Self {
            name: details.name.as_str().to_string(),
            description: details
                .description
                .as_ref()
                .map(|d| d.as_str().to_string()),
            price: details.price.get(),
            category: details.category.as_str().to_string(),
            images: encode_images(&details.images)?,
            protein_type: details.protein_type.as_str().to_string(),
            is_active: details.is_active,
            updated_at,
        })
    }
}
