#![allow(dead_code)]

use actix_web::http::header::{AUTHORIZATION, HeaderName};
use rust_exam_system::config::*;
use rust_exam_system::models::auth::{Identity, LoginRequest, RegisterRequest, TokenResponse};
use rust_exam_system::runtime::lifetime::startup::{StartupContext, seed_admin};
use rust_exam_system::storage::create_storage;

pub const ADMIN_CONTACT: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const PASSWORD: &str = "pass123";

/// 内存数据库 + 低成本 Argon2 参数
pub fn test_config() -> AppConfig {
    AppConfig {
        app: AppSettings {
            system_name: "exam-test".to_string(),
            environment: "development".to_string(),
            log_level: "warn".to_string(),
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            workers: 1,
            max_workers: 1,
            timeouts: TimeoutConfig {
                client_request: 5000,
                client_disconnect: 1000,
                keep_alive: 30,
            },
            limits: LimitConfig {
                max_payload_size: 65_536,
            },
        },
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            algorithm: "HS256".to_string(),
            access_token_expiry: 30,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
            max_age: 3600,
        },
        argon2: Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        },
        admin: AdminConfig {
            contact: ADMIN_CONTACT.to_string(),
            name: "Administrator".to_string(),
            password: ADMIN_PASSWORD.to_string(),
        },
    }
}

/// 每个测试一个全新的数据库，并预置管理员
pub async fn setup() -> StartupContext {
    let config = test_config();
    let storage = create_storage(&config.database)
        .await
        .expect("in-memory storage");
    seed_admin(&storage, &config).await.expect("admin seed");
    StartupContext::new(storage, &config).expect("startup context")
}

macro_rules! test_app {
    ($ctx:expr) => {{
        let ctx = $ctx.clone();
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(
                    actix_web::web::JsonConfig::default()
                        .error_handler(rust_exam_system::utils::json_error_handler),
                )
                .app_data(
                    actix_web::web::PathConfig::default()
                        .error_handler(rust_exam_system::utils::path_error_handler),
                )
                .configure(move |cfg| ctx.configure(cfg))
                .configure(rust_exam_system::routes::configure_all_routes),
        )
        .await
    }};
}

pub async fn register(ctx: &StartupContext, contact: &str, role: Option<&str>) -> TokenResponse {
    ctx.auth
        .register(RegisterRequest {
            contact: contact.to_string(),
            fullname: format!("User {contact}"),
            password: PASSWORD.to_string(),
            role: role.map(str::to_string),
        })
        .await
        .expect("registration")
}

pub async fn admin_token(ctx: &StartupContext) -> TokenResponse {
    ctx.auth
        .login(LoginRequest {
            contact: ADMIN_CONTACT.to_string(),
            password: ADMIN_PASSWORD.to_string(),
        })
        .await
        .expect("admin login")
}

pub async fn identity(ctx: &StartupContext, token: &str) -> Identity {
    ctx.guard
        .authenticate(Some(&format!("Bearer {token}")))
        .await
        .expect("valid token")
}

pub fn bearer(token: &str) -> (HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}
