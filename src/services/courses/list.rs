use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::CourseService;
use crate::models::ErrorResponse;

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_courses().await {
        Ok(courses) => Ok(HttpResponse::Ok().json(courses)),
        Err(e) => {
            error!("Failed to retrieve course list: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                    "Failed to retrieve course list: {}",
                    e.message()
                ))),
            )
        }
    }
}
