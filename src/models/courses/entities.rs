use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::Result;

/// 课程记录
///
/// 除 `id` 外不约束任何字段，创建时提交的字段原样保存。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Course {
    /// 用给定 ID 覆盖字段中可能携带的 `id`
    pub fn new(id: i64, mut fields: Map<String, Value>) -> Self {
        fields.remove("id");
        Self { id, fields }
    }

    /// 从 JSON 对象构建课程，对象必须包含整数 `id`
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn title(&self) -> Option<&str> {
        self.fields.get("title").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_discards_caller_id() {
        let fields = json!({ "id": 1, "title": "X" })
            .as_object()
            .cloned()
            .unwrap();
        let course = Course::new(42, fields);
        assert_eq!(course.id, 42);
        assert!(!course.fields.contains_key("id"));
        assert_eq!(
            serde_json::to_value(&course).unwrap(),
            json!({ "id": 42, "title": "X" })
        );
    }

    #[test]
    fn test_from_value_requires_id() {
        let course = Course::from_value(json!({ "id": 7, "credits": 3 })).unwrap();
        assert_eq!(course.id, 7);
        assert_eq!(course.fields.get("credits"), Some(&json!(3)));

        let err = Course::from_value(json!({ "title": "no id" })).unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_title_accessor() {
        let course = Course::from_value(json!({ "id": 1, "title": "React Avancé" })).unwrap();
        assert_eq!(course.title(), Some("React Avancé"));
    }
}
