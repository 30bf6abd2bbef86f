pub mod accounts;

pub mod auth;

pub mod exams;

pub mod results;

pub mod students;

pub mod system;

pub use accounts::configure_account_routes;
pub use auth::configure_auth_routes;
pub use exams::configure_exam_routes;
pub use results::configure_result_routes;
pub use students::configure_student_routes;
pub use system::configure_system_routes;

use actix_web::web;

/// 注册全部路由
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(configure_auth_routes) // 认证相关路由
        .configure(configure_student_routes) // 学生相关路由
        .configure(configure_exam_routes) // 考试相关路由
        .configure(configure_result_routes) // 成绩相关路由
        .configure(configure_account_routes) // 账户管理路由
        .configure(configure_system_routes); // 健康检查
}
