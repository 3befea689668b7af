pub mod auth;
pub mod courses;

pub use auth::AuthService;
pub use courses::CourseService;

use actix_web::{HttpRequest, Result as ActixResult, error, web};
use std::sync::Arc;

use crate::storage::Storage;

/// 优先使用服务自带的存储，否则从 app data 中获取
pub(crate) fn resolve_storage(
    own: Option<&Arc<dyn Storage>>,
    request: &HttpRequest,
) -> ActixResult<Arc<dyn Storage>> {
    if let Some(storage) = own {
        return Ok(storage.clone());
    }
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| {
            tracing::error!("Storage not found in app data");
            error::ErrorInternalServerError("Storage not found in app data")
        })
}
