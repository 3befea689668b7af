use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    error::{InternalError, JsonPayloadError},
    web,
};
use tracing::warn;

use crate::models::ErrorResponse;

/// JSON 请求体配置：不校验 Content-Type，只要求请求体本身是合法 JSON
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type(|_| true)
        .content_type_required(false)
        .error_handler(json_error_handler)
}

/// JSON 请求体解析失败时返回 `{ "error": "..." }`
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Deserialize(e) => format!("Invalid JSON body: {e}"),
        other => format!("Invalid request body: {other}"),
    };

    warn!("{} {}: {}", req.method(), req.path(), message);

    let response = HttpResponse::build(err.status_code()).json(ErrorResponse::new(message));
    InternalError::from_response(err, response).into()
}
