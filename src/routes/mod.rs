//! HTTP surface. Every endpoint answers with the `{code, message, data?}`
//! envelope and `code` mirrors the HTTP status.

use actix_cors::Cors;
use actix_multipart::form::MultipartFormConfig;
use actix_web::http::{StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, ResponseError, error, get, web};
use serde::Serialize;

use crate::services::ServiceError;

pub mod categories;
pub mod products;
pub mod upload;

const SUCCESS: &str = "success";

/// Response envelope shared by all endpoints.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: StatusCode::OK.as_u16(),
            message: SUCCESS.to_string(),
            data: Some(data),
        }
    }

    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data: None,
        }
    }
}

/// `200` with the payload wrapped in the envelope.
pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data))
}

/// `201` with the created resource wrapped in the envelope.
pub fn created<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiResponse {
        code: StatusCode::CREATED.as_u16(),
        message: SUCCESS.to_string(),
        data: Some(data),
    })
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Unauthorized => StatusCode::FORBIDDEN,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::AlreadyExists => StatusCode::CONFLICT,
            ServiceError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        HttpResponse::build(status).json(ApiResponse::<()>::error(status, self.to_string()))
    }
}

fn bad_request<E>(err: E) -> error::Error
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let message = err.to_string();
    log::warn!("Rejected request body: {message}");
    error::InternalError::from_response(
        err,
        HttpResponse::BadRequest().json(ApiResponse::<()>::error(StatusCode::BAD_REQUEST, message)),
    )
    .into()
}

/// Report malformed JSON bodies through the envelope as validation failures.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req: &HttpRequest| bad_request(err))
}

/// Same treatment for malformed query strings.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req: &HttpRequest| bad_request(err))
}

/// Same treatment for unreadable multipart bodies.
pub fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default().error_handler(|err, _req: &HttpRequest| bad_request(err))
}

/// CORS policy for browser callers. An empty origin list allows any origin.
pub fn cors(allowed_origins: &[String]) -> Cors {
    let cors = allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));
    let cors = if allowed_origins.is_empty() {
        cors.allow_any_origin()
    } else {
        cors
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600)
}

#[get("/health-check")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::<()> {
        code: StatusCode::OK.as_u16(),
        message: SUCCESS.to_string(),
        data: None,
    })
}

/// Register every endpoint. Static paths come before `/{id}` so they are
/// never captured by it.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .app_data(multipart_config())
        .service(health_check)
        .service(categories::list_categories)
        .service(products::list_venue_products)
        .service(products::create_product)
        .service(upload::upload_product_image)
        .service(products::get_venue_product)
        .service(products::update_product)
        .service(products::delete_product)
        .service(products::list_public_products)
        .service(products::get_public_product);
}
