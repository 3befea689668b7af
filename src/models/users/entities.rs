use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 用户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "user.ts")]
pub enum UserRole {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
}

impl UserRole {
    pub const ADMIN: &'static str = "ADMIN";
    pub const TEACHER: &'static str = "TEACHER";
    pub const STUDENT: &'static str = "STUDENT";
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", UserRole::ADMIN),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            UserRole::STUDENT => Ok(UserRole::Student),
            _ => Err(format!(
                "Invalid user role: '{s}'. Supported roles: ADMIN, TEACHER, STUDENT"
            )),
        }
    }
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "user.ts")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password: String,
    pub role: UserRole,
}

impl User {
    pub fn new(id: i64, email: &str, password: &str, role: UserRole) -> Self {
        Self {
            id,
            email: email.to_string(),
            password: password.to_string(),
            role,
        }
    }

    /// 明文比对邮箱和密码，均区分大小写
    pub fn matches_credentials(&self, email: &str, password: &str) -> bool {
        self.email == email && self.password == password
    }

    // 生成模拟会话令牌，不签名、不过期、不会被校验
    pub fn mock_token(&self) -> String {
        format!("mock-token-{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_strings() {
        for role in [UserRole::Admin, UserRole::Teacher, UserRole::Student] {
            assert_eq!(role.to_string().parse::<UserRole>(), Ok(role));
        }
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_user_serialization_hides_password() {
        let user = User::new(2, "prof@campus.fr", "password", UserRole::Teacher);
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 2, "email": "prof@campus.fr", "role": "TEACHER" })
        );
    }

    #[test]
    fn test_matches_credentials_is_exact() {
        let user = User::new(1, "admin@campus.fr", "password", UserRole::Admin);
        assert!(user.matches_credentials("admin@campus.fr", "password"));
        assert!(!user.matches_credentials("Admin@campus.fr", "password"));
        assert!(!user.matches_credentials("admin@campus.fr", "Password"));
        assert!(!user.matches_credentials("", ""));
    }

    #[test]
    fn test_mock_token_format() {
        let user = User::new(3, "etudiant@campus.fr", "password", UserRole::Student);
        assert_eq!(user.mock_token(), "mock-token-3");
    }
}
