use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::ProductDetails;
use crate::domain::types::{
    ImageRef, ProductCategory, ProductDescription, ProductName, ProductPrice, ProteinType,
    TypeConstraintError,
};

/// JSON body accepted by product create and update.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProductForm {
    #[validate(length(min = 1, message = "The name is required."))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "The price must be a number of at least 0."))]
    pub price: f64,
    #[validate(length(min = 1, message = "The category is required."))]
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[validate(length(min = 1, message = "The proteinType is required."))]
    pub protein_type: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormPayload {
    pub details: ProductDetails,
}

#[derive(Debug, Error)]
pub enum ProductFormError {
    #[error("Product form validation failed: {0}")]
    Validation(String),
    #[error("Product form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ProductFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = ProductFormError;

    fn try_from(value: ProductForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let description = value
            .description
            .filter(|d| !d.trim().is_empty())
            .map(ProductDescription::new)
            .transpose()?;

        Ok(Self {
            details: ProductDetails {
                name: ProductName::new(value.name)?,
                description,
                price: ProductPrice::new(value.price)?,
                category: ProductCategory::try_from(value.category.trim())?,
                images: value
                    .images
                    .into_iter()
                    .map(ImageRef::new)
                    .collect::<Result<_, _>>()?,
                protein_type: ProteinType::new(value.protein_type)?,
                is_active: value.is_active,
            },
        })
    }
}
