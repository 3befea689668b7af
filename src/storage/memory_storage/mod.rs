//! 内存存储实现
//!
//! 用户名册固定不变，课程列表随进程存活，重启后恢复为种子数据。

mod courses;
mod users;

use crate::errors::Result;
use crate::models::{
    courses::{entities::Course, requests::CreateCourseRequest},
    users::entities::User,
};
use crate::storage::Storage;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use courses::CourseTable;

/// 内存存储实现
pub struct MemoryStorage {
    pub(crate) roster: Vec<User>,
    pub(crate) courses: RwLock<CourseTable>,
}

impl MemoryStorage {
    /// 创建带种子数据的存储实例
    pub fn new() -> Result<Self> {
        let roster = users::seed_roster();
        let course_table = CourseTable::new(courses::seed_courses()?);

        debug!(
            "Memory storage seeded with {} users and {} courses",
            roster.len(),
            course_table.items.len()
        );

        Ok(Self {
            roster,
            courses: RwLock::new(course_table),
        })
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    // 用户模块
    async fn get_user_by_credentials(&self, email: &str, password: &str) -> Result<Option<User>> {
        self.get_user_by_credentials_impl(email, password).await
    }

    // 课程模块
    async fn list_courses(&self) -> Result<Vec<Course>> {
        self.list_courses_impl().await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }
}
