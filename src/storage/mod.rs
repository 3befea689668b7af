use std::sync::Arc;

use crate::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    users::entities::User,
};

use crate::errors::Result;

pub mod memory_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 按邮箱和密码查找用户，两者必须同时精确匹配
    async fn get_user_by_credentials(&self, email: &str, password: &str) -> Result<Option<User>>;

    /// 课程管理方法
    // 按插入顺序列出全部课程
    async fn list_courses(&self) -> Result<Vec<Course>>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 创建课程并分配新ID
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
}

pub fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = memory_storage::MemoryStorage::new()?;
    Ok(Arc::new(storage))
}
