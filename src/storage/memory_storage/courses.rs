//! 课程存储操作

use serde_json::json;

use super::MemoryStorage;
use crate::errors::{CampusError, Result};
use crate::models::courses::{entities::Course, requests::CreateCourseRequest};

/// 初始课程
pub(super) fn seed_courses() -> Result<Vec<Course>> {
    [
        json!({
            "id": 1,
            "title": "React Avancé",
            "description": "Cours React",
            "semester": "S1 2024",
            "credits": 6
        }),
        json!({
            "id": 2,
            "title": "Node.js Backend",
            "description": "Cours Node.js",
            "semester": "S1 2024",
            "credits": 4
        }),
    ]
    .into_iter()
    .map(Course::from_value)
    .collect()
}

/// 计算下一个课程 ID
///
/// 取当前毫秒时间戳，但保证严格大于上一个已分配的 ID。
pub(crate) fn next_course_id(last_id: i64, now_millis: i64) -> Result<i64> {
    let floor = last_id
        .checked_add(1)
        .ok_or_else(|| CampusError::storage_operation("Course id space exhausted"))?;
    Ok(now_millis.max(floor))
}

/// 有序课程表
pub(crate) struct CourseTable {
    pub(crate) items: Vec<Course>,
    pub(crate) last_id: i64,
}

impl CourseTable {
    pub(crate) fn new(items: Vec<Course>) -> Self {
        let last_id = items.iter().map(|c| c.id).max().unwrap_or(0);
        Self { items, last_id }
    }

    pub(crate) fn push(&mut self, fields: CreateCourseRequest, now_millis: i64) -> Result<Course> {
        let id = next_course_id(self.last_id, now_millis)?;
        let course = Course::new(id, fields.into_fields());
        self.last_id = id;
        self.items.push(course.clone());
        Ok(course)
    }
}

impl MemoryStorage {
    /// 列出全部课程（插入顺序）
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        Ok(self.courses.read().await.items.clone())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        Ok(self
            .courses
            .read()
            .await
            .items
            .iter()
            .find(|c| c.id == course_id)
            .cloned())
    }

    /// 创建课程
    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp_millis();
        self.courses.write().await.push(req, now)
    }
}
