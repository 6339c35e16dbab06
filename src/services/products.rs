use chrono::Utc;

use crate::auth::AuthenticatedUser;
use crate::domain::access::VenueProductKey;
use crate::domain::product::{NewProduct, Product};
use crate::domain::types::VenueId;
use crate::forms::products::ProductFormPayload;
use crate::repository::errors::RepositoryError;
use crate::repository::{CreateGuard, DeletePolicy, ProductReader, ProductWriter, VenueReader};

use super::access::{authorize_product_access, parse_product_id};
use super::identity::resolve_venue_id;
use super::{ServiceError, ServiceResult};

/// Public fetch of a single product.
///
/// Only active products are visible; an inactive or missing product is
/// reported as [`ServiceError::NotFound`].
pub fn get_public_product<R>(product_id: &str, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_active_product(&product_id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(e.into())
        }
    }
}

/// Public listing of every product of a venue.
///
/// Unlike [`get_public_product`] the listing is not filtered by the active
/// flag; it shows the venue's products as currently authored.
pub fn list_public_products<R>(venue_id: Option<&str>, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    let venue_id = venue_id
        .and_then(|v| VenueId::new(v).ok())
        .ok_or_else(|| ServiceError::Validation("venueid is required!".to_string()))?;

    repo.list_venue_products(&venue_id).map_err(|e| {
        log::error!("Failed to list venue products: {e}");
        e.into()
    })
}

/// Owner view of a single product.
pub fn get_venue_product<R>(
    product_id: &str,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Product>
where
    R: VenueReader + ProductReader,
{
    let venue_id = resolve_venue_id(user, repo)?;
    let product_id = parse_product_id(product_id)?;

    authorize_product_access(venue_id, product_id, repo).map(|token| token.into_product())
}

/// Owner view of all products of the caller's venue.
pub fn list_venue_products<R>(user: &AuthenticatedUser, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: VenueReader + ProductReader,
{
    let venue_id = resolve_venue_id(user, repo)?;

    repo.list_venue_products(&venue_id).map_err(|e| {
        log::error!("Failed to list venue products: {e}");
        e.into()
    })
}

/// Create a product owned by the caller's venue.
///
/// The new product gets a fresh id and equal creation and update timestamps.
/// `guard` decides when the conditional write refuses with
/// [`ServiceError::AlreadyExists`].
pub fn create_product<R>(
    payload: ProductFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
    guard: CreateGuard,
) -> ServiceResult<Product>
where
    R: VenueReader + ProductWriter,
{
    let venue_id = resolve_venue_id(user, repo)?;
    let product = NewProduct::new(venue_id, payload.details, Utc::now().naive_utc());

    match repo.create_product(&product, guard) {
        Ok(created) => {
            log::info!("Created product {} for venue {}", created.id, created.venue_id);
            Ok(created)
        }
        Err(RepositoryError::AlreadyExists) => {
            log::warn!(
                "Create guard {guard:?} refused product for venue {}",
                product.venue_id
            );
            Err(ServiceError::AlreadyExists)
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(e.into())
        }
    }
}

/// Replace every mutable attribute of one of the caller's products.
///
/// The write is addressed by the composite key; a key that matches nothing
/// is [`ServiceError::NotFound`]. Returns the stored post-update product.
pub fn update_product<R>(
    product_id: &str,
    payload: ProductFormPayload,
    user: &AuthenticatedUser,
    repo: &R,
) -> ServiceResult<Product>
where
    R: VenueReader + ProductWriter,
{
    let venue_id = resolve_venue_id(user, repo)?;
    let key = VenueProductKey::new(venue_id, parse_product_id(product_id)?);

    match repo.update_product(&key, &payload.details, Utc::now().naive_utc()) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update product: {e}");
            Err(e.into())
        }
    }
}

/// Delete one of the caller's products by composite key.
///
/// Under [`DeletePolicy::Strict`] a key that matches nothing is
/// [`ServiceError::NotFound`]; under [`DeletePolicy::Lenient`] it succeeds.
pub fn delete_product<R>(
    product_id: &str,
    user: &AuthenticatedUser,
    repo: &R,
    policy: DeletePolicy,
) -> ServiceResult<()>
where
    R: VenueReader + ProductWriter,
{
    let venue_id = resolve_venue_id(user, repo)?;
    let key = VenueProductKey::new(venue_id, parse_product_id(product_id)?);

    match repo.delete_product(&key) {
        Ok(0) if policy == DeletePolicy::Strict => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(e.into())
        }
    }
}
