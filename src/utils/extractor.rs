//! 路径参数安全提取器

use actix_web::{FromRequest, HttpRequest, HttpResponse, dev::Payload, error::InternalError};
use std::future::{Ready, ready};

use crate::models::ErrorResponse;
use crate::services::courses::get::COURSE_NOT_FOUND;

/// 从 `{course_id}` 路径段解析课程 ID，非数字 ID 视为课程不存在
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeCourseIdI64(pub i64);

impl FromRequest for SafeCourseIdI64 {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("course_id").unwrap_or_default();
        let result: Result<Self, Self::Error> =
            raw.parse::<i64>().map(SafeCourseIdI64).map_err(|_| {
                InternalError::from_response(
                    format!("invalid course id: {raw}"),
                    HttpResponse::NotFound().json(ErrorResponse::new(COURSE_NOT_FOUND)),
                )
                .into()
            });
        ready(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test::TestRequest};

    #[actix_web::test]
    async fn test_numeric_course_id() {
        let (req, mut payload) = TestRequest::default()
            .param("course_id", "42")
            .to_http_parts();
        let id = SafeCourseIdI64::from_request(&req, &mut payload)
            .await
            .unwrap();
        assert_eq!(id, SafeCourseIdI64(42));
    }

    #[actix_web::test]
    async fn test_non_numeric_course_id_is_not_found() {
        let (req, mut payload) = TestRequest::default()
            .param("course_id", "abc")
            .to_http_parts();
        let err = SafeCourseIdI64::from_request(&req, &mut payload)
            .await
            .unwrap_err();
        assert_eq!(err.as_response_error().status_code(), StatusCode::NOT_FOUND);
    }
}
