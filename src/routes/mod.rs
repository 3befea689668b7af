/// 测试用：基于独立存储构建完整 API 应用
#[cfg(test)]
macro_rules! init_test_app {
    ($storage:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(crate::utils::json_config())
                .app_data(actix_web::web::Data::new($storage))
                .configure(crate::routes::configure_auth_routes)
                .configure(crate::routes::configure_course_routes),
        )
        .await
    };
}

pub mod auth;

pub mod courses;

pub mod frontend;

pub use auth::configure_auth_routes;
pub use courses::configure_course_routes;
pub use frontend::configure_frontend_routes;
