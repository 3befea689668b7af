use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::auth::requests::LoginRequest;
use crate::services::AuthService;

// 懒加载的全局 AuthService 实例
static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

pub async fn login(
    req: HttpRequest,
    user_data: web::Json<LoginRequest>,
) -> ActixResult<HttpResponse> {
    AUTH_SERVICE.login(user_data.into_inner(), &req).await
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/auth").route("/login", web::post().to(login)));
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test};
    use serde_json::{Value, json};

    use crate::storage::create_storage;

    #[actix_web::test]
    async fn test_roster_users_can_log_in() {
        let app = init_test_app!(create_storage().unwrap());

        for (email, id, role) in [
            ("admin@campus.fr", 1, "ADMIN"),
            ("prof@campus.fr", 2, "TEACHER"),
            ("etudiant@campus.fr", 3, "STUDENT"),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "email": email, "password": "password" }))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(
                body,
                json!({
                    "user": { "id": id, "email": email, "role": role },
                    "token": format!("mock-token-{id}")
                })
            );
            assert!(body["token"].as_str().unwrap().ends_with(&id.to_string()));
        }
    }

    #[actix_web::test]
    async fn test_wrong_password_and_unknown_email_are_indistinguishable() {
        let app = init_test_app!(create_storage().unwrap());

        let mut bodies = Vec::new();
        for payload in [
            json!({ "email": "admin@campus.fr", "password": "nope" }),
            json!({ "email": "ghost@campus.fr", "password": "password" }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
            bodies.push(test::read_body(resp).await);
        }

        assert_eq!(bodies[0], bodies[1]);
        let body: Value = serde_json::from_slice(&bodies[0]).unwrap();
        assert_eq!(body, json!({ "error": "Invalid credentials" }));
    }

    #[actix_web::test]
    async fn test_email_match_is_case_sensitive() {
        let app = init_test_app!(create_storage().unwrap());
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "Admin@Campus.fr", "password": "password" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_empty_credentials_fail_closed() {
        let app = init_test_app!(create_storage().unwrap());
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "", "password": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_malformed_body_is_parse_failure() {
        let app = init_test_app!(create_storage().unwrap());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"email\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "admin@campus.fr" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_login_body_without_json_content_type() {
        let app = init_test_app!(create_storage().unwrap());
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_payload(r#"{"email":"admin@campus.fr","password":"password"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["token"], "mock-token-1");
    }
}
