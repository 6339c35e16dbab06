use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::Deserialize;

use crate::auth::AuthenticatedUser;
use crate::forms::products::{ProductForm, ProductFormPayload};
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{created, ok};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    get_public_product as get_public_product_service,
    get_venue_product as get_venue_product_service,
    list_public_products as list_public_products_service,
    list_venue_products as list_venue_products_service, update_product as update_product_service,
};

#[derive(Deserialize)]
struct PublicProductsQueryParams {
    venueid: Option<String>,
}

fn into_payload(form: ProductForm) -> Result<ProductFormPayload, ServiceError> {
    form.try_into().map_err(|e| {
        log::warn!("Rejected product payload: {e}");
        ServiceError::from(e)
    })
}

#[get("/venue")]
pub async fn list_venue_products(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    list_venue_products_service(&user, repo.get_ref()).map(ok)
}

#[post("/venue")]
pub async fn create_product(
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    web::Json(form): web::Json<ProductForm>,
) -> Result<HttpResponse, ServiceError> {
    let payload = into_payload(form)?;
    create_product_service(payload, &user, repo.get_ref(), server_config.create_guard).map(created)
}

#[get("/venue/{product_id}")]
pub async fn get_venue_product(
    product_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    get_venue_product_service(&product_id, &user, repo.get_ref()).map(ok)
}

#[put("/venue/{product_id}")]
pub async fn update_product(
    product_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    web::Json(form): web::Json<ProductForm>,
) -> Result<HttpResponse, ServiceError> {
    let payload = into_payload(form)?;
    update_product_service(&product_id, payload, &user, repo.get_ref()).map(ok)
}

#[delete("/venue/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<String>,
    user: AuthenticatedUser,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServiceError> {
    delete_product_service(
        &product_id,
        &user,
        repo.get_ref(),
        server_config.delete_policy,
    )?;
    Ok(ok(product_id.into_inner()))
}

#[get("/")]
pub async fn list_public_products(
    params: web::Query<PublicProductsQueryParams>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    list_public_products_service(params.venueid.as_deref(), repo.get_ref()).map(ok)
}

#[get("/{product_id}")]
pub async fn get_public_product(
    product_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    get_public_product_service(&product_id, repo.get_ref()).map(ok)
}
