use actix_web::{HttpResponse, get, web};

use crate::forms::categories::CategoriesQuery;
use crate::repository::DieselRepository;
use crate::routes::ok;
use crate::services::ServiceError;
use crate::services::categories::list_categories as list_categories_service;

#[get("/categories")]
pub async fn list_categories(
    params: web::Query<CategoriesQuery>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    list_categories_service(params.category_type.as_deref(), repo.get_ref()).map(ok)
}
