use chrono::Utc;

use crate::auth::AuthenticatedUser;
use crate::domain::types::PublicUrl;
use crate::domain::upload::{UploadRejection, ValidatedImage, storage_key};
use crate::forms::upload::ImageUpload;
use crate::repository::VenueReader;
use crate::storage::{ObjectAcl, ObjectStore};

use super::identity::resolve_venue_id;
use super::{ServiceError, ServiceResult};

/// Store a product image and return its public URL.
///
/// Presence, size and format are checked before anything else, so a rejected
/// upload never reaches the profile store or the object store. The object is
/// written once with public-read access; storage failures are passed
/// through as [`ServiceError::Upstream`].
pub async fn upload_product_image<R>(
    user: &AuthenticatedUser,
    upload: Option<ImageUpload>,
    repo: &R,
    store: &dyn ObjectStore,
    public_base_url: &str,
) -> ServiceResult<PublicUrl>
where
    R: VenueReader,
{
    let upload = upload.ok_or(UploadRejection::MissingOrTooLarge)?;
    let image = ValidatedImage::validate(upload.bytes, upload.content_type.as_deref(), upload.size)?;

    let venue_id = resolve_venue_id(user, repo)?;

    let key = storage_key(Utc::now().date_naive(), image.mime);
    let url = PublicUrl::new(format!("{public_base_url}/{key}")).map_err(|e| {
        log::error!("Public base url {public_base_url} yields an invalid image url: {e}");
        ServiceError::Upstream(e.to_string())
    })?;

    store
        .put_object(&key, image.bytes, image.mime.content_type(), ObjectAcl::PublicRead)
        .await
        .map_err(|e| {
            log::error!("Failed to store image {key}: {e}");
            ServiceError::from(e)
        })?;

    log::info!("Stored image {key} for venue {venue_id}");

    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test::TestRepository;
    use crate::services::identity::tests::{venue_profile, venue_user};
    use crate::storage::MemoryObjectStore;

    const BASE: &str = "https://images.appetizr.co";

    fn repo() -> TestRepository {
        TestRepository::new(
            vec![venue_profile("v1@example.com", "sub-1", "ven-1")],
            vec![],
            vec![],
        )
    }

    fn upload(content_type: &str, size: usize) -> Option<ImageUpload> {
        Some(ImageUpload {
            bytes: vec![7; size],
            content_type: Some(content_type.to_string()),
            size: size as u64,
        })
    }

    #[actix_web::test]
    async fn stores_png_under_dated_key() {
        let store = MemoryObjectStore::new();
        let user = venue_user("v1@example.com", "sub-1");

        let url = upload_product_image(&user, upload("image/png", 100 * 1024), &repo(), &store, BASE)
            .await
            .unwrap();

        assert!(url.as_str().starts_with("https://images.appetizr.co/"));
        assert!(url.as_str().ends_with(".png"));

        let keys = store.keys();
        assert_eq!(keys.len(), 1);
        let key = &keys[0];
        assert_eq!(url.as_str(), format!("{BASE}/{key}"));
        assert_eq!(key.split('/').count(), 4);

        let stored = store.get(key).unwrap();
        assert_eq!(stored.content_type, "image/png");
        assert_eq!(stored.acl, ObjectAcl::PublicRead);
        assert_eq!(stored.data.len(), 100 * 1024);
    }

    #[actix_web::test]
    async fn jpeg_extension_comes_from_mime_type() {
        let store = MemoryObjectStore::new();
        let user = venue_user("v1@example.com", "sub-1");

        let url = upload_product_image(&user, upload("image/jpeg", 10), &repo(), &store, BASE)
            .await
            .unwrap();

        assert!(url.as_str().ends_with(".jpeg"));
    }

    #[actix_web::test]
    async fn oversize_and_gif_uploads_are_rejected_without_io() {
        let store = MemoryObjectStore::new();
        let user = venue_user("v1@example.com", "sub-1");

        let too_large = upload_product_image(
            &user,
            upload("image/png", 6 * 1024 * 1024),
            &repo(),
            &store,
            BASE,
        )
        .await;
        assert!(matches!(too_large, Err(ServiceError::Validation(_))));

        let gif = upload_product_image(&user, upload("image/gif", 10), &repo(), &store, BASE).await;
        assert!(matches!(gif, Err(ServiceError::Validation(_))));

        let missing = upload_product_image(&user, None, &repo(), &store, BASE).await;
        assert_eq!(
            missing.unwrap_err(),
            ServiceError::Validation(UploadRejection::MissingOrTooLarge.to_string())
        );

        assert!(store.keys().is_empty());
    }

    #[actix_web::test]
    async fn empty_png_is_accepted() {
        let store = MemoryObjectStore::new();
        let user = venue_user("v1@example.com", "sub-1");

        let url = upload_product_image(&user, upload("image/png", 0), &repo(), &store, BASE)
            .await
            .unwrap();

        assert!(url.as_str().ends_with(".png"));
        let keys = store.keys();
        assert_eq!(keys.len(), 1);
        assert!(store.get(&keys[0]).unwrap().data.is_empty());
    }

    #[actix_web::test]
    async fn invalid_base_url_stores_nothing() {
        let store = MemoryObjectStore::new();
        let user = venue_user("v1@example.com", "sub-1");

        let result =
            upload_product_image(&user, upload("image/png", 10), &repo(), &store, "not a url").await;

        assert!(matches!(result, Err(ServiceError::Upstream(_))));
        assert!(store.keys().is_empty());
    }

    #[actix_web::test]
    async fn unknown_venue_is_not_found() {
        let store = MemoryObjectStore::new();
        let stranger = venue_user("nobody@example.com", "sub-9");

        let result =
            upload_product_image(&stranger, upload("image/png", 10), &repo(), &store, BASE).await;

        assert_eq!(result.unwrap_err(), ServiceError::NotFound);
        assert!(store.keys().is_empty());
    }

    #[actix_web::test]
    async fn storage_failure_is_passed_through() {
        let store = MemoryObjectStore::failing("AccessDenied");
        let user = venue_user("v1@example.com", "sub-1");

        let result =
            upload_product_image(&user, upload("image/png", 10), &repo(), &store, BASE).await;

        match result {
            Err(ServiceError::Upstream(message)) => assert!(message.contains("AccessDenied")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
