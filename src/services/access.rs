use crate::domain::access::{ProductOwnership, VenueProductKey};
use crate::domain::types::{ProductId, VenueId};
use crate::repository::ProductReader;

use super::{ServiceError, ServiceResult};

/// Parse a product id taken from the request path.
///
/// An unusable id cannot address any product, so it is reported as not found.
pub fn parse_product_id(raw: &str) -> ServiceResult<ProductId> {
    ProductId::new(raw).map_err(|_| ServiceError::NotFound)
}

/// Grant access to `product_id` only if it is stored under `venue_id`.
///
/// The lookup is keyed by the composite `(product id, venue id)`, so a product
/// of another venue and a missing product both yield
/// [`ServiceError::NotFound`].
pub fn authorize_product_access<R>(
    venue_id: VenueId,
    product_id: ProductId,
    repo: &R,
) -> ServiceResult<ProductOwnership>
where
    R: ProductReader,
{
    let key = VenueProductKey::new(venue_id, product_id);

    let product = match repo.get_venue_product(&key) {
        Ok(Some(product)) => product,
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get venue product: {e}");
            return Err(e.into());
        }
    };

    ProductOwnership::verify(key, product).ok_or(ServiceError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;
    use crate::services::products::tests::sample_product;

    #[test]
    fn owner_gets_a_token_for_its_product() {
        let repo = TestRepository::new(vec![], vec![sample_product("p-1", "ven-1", true)], vec![]);
        let token = authorize_product_access(
            VenueId::new("ven-1").unwrap(),
            ProductId::new("p-1").unwrap(),
            &repo,
        )
        .unwrap();
        assert_eq!(token.key().venue_id, "ven-1");
        assert_eq!(token.product().id, "p-1");
    }

    #[test]
    fn other_venue_and_missing_product_look_the_same() {
        let repo = TestRepository::new(vec![], vec![sample_product("p-1", "ven-1", true)], vec![]);

        let foreign = authorize_product_access(
            VenueId::new("ven-2").unwrap(),
            ProductId::new("p-1").unwrap(),
            &repo,
        )
        .unwrap_err();
        let missing = authorize_product_access(
            VenueId::new("ven-2").unwrap(),
            ProductId::new("p-404").unwrap(),
            &repo,
        )
        .unwrap_err();

        assert_eq!(foreign, ServiceError::NotFound);
        assert_eq!(foreign, missing);
    }

    #[test]
    fn blank_path_id_is_not_found() {
        assert_eq!(parse_product_id("  ").unwrap_err(), ServiceError::NotFound);
    }
}
