use serde::Deserialize;
use serde_json::{Map, Value};

// 创建课程请求：任意 JSON 对象，不做字段校验
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CreateCourseRequest(pub Map<String, Value>);

impl CreateCourseRequest {
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}
