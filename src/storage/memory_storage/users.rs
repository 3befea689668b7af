//! 用户存储操作

use super::MemoryStorage;
use crate::errors::Result;
use crate::models::users::entities::{User, UserRole};

/// 固定用户名册
pub(super) fn seed_roster() -> Vec<User> {
    vec![
        User::new(1, "admin@campus.fr", "password", UserRole::Admin),
        User::new(2, "prof@campus.fr", "password", UserRole::Teacher),
        User::new(3, "etudiant@campus.fr", "password", UserRole::Student),
    ]
}

impl MemoryStorage {
    /// 线性扫描名册
    pub async fn get_user_by_credentials_impl(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        Ok(self
            .roster
            .iter()
            .find(|user| user.matches_credentials(email, password))
            .cloned())
    }
}
