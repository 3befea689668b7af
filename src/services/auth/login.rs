use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use crate::models::{
    ErrorResponse,
    auth::{LoginRequest, LoginResponse},
};

use super::AuthService;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    // 未知邮箱与错误密码返回相同响应
    match storage
        .get_user_by_credentials(&login_request.email, &login_request.password)
        .await
    {
        Ok(Some(user)) => {
            info!("User {} ({}) logged in successfully", user.id, user.role);
            let token = user.mock_token();
            Ok(HttpResponse::Ok().json(LoginResponse { user, token }))
        }
        Ok(None) => {
            warn!("Rejected login attempt for {}", login_request.email);
            Ok(HttpResponse::Unauthorized().json(ErrorResponse::new(INVALID_CREDENTIALS)))
        }
        Err(e) => {
            error!("Login failed: {}", e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Login failed: {}",
                e.message()
            ))))
        }
    }
}
