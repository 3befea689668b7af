use crate::models::users::entities::User;
use serde::Serialize;
use ts_rs::TS;

// 登录成功响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "auth.ts")]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}
