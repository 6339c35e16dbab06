use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, post, web};

use crate::auth::AuthenticatedUser;
use crate::forms::upload::ProductImageUploadForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::ok;
use crate::services::ServiceError;
use crate::services::upload::upload_product_image as upload_product_image_service;
use crate::storage::ObjectStore;

#[post("/venue/upload")]
pub async fn upload_product_image(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    store: web::Data<dyn ObjectStore>,
    server_config: web::Data<ServerConfig>,
    MultipartForm(form): MultipartForm<ProductImageUploadForm>,
) -> Result<HttpResponse, ServiceError> {
    let upload = form.into_upload().await.map_err(|e| {
        log::error!("Failed to read spooled upload: {e}");
        ServiceError::Upstream(e.to_string())
    })?;

    let url = upload_product_image_service(
        &user,
        upload,
        repo.get_ref(),
        store.get_ref(),
        &server_config.public_base_url(),
    )
    .await?;

    Ok(ok(url))
}
