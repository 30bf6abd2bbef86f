use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares;
use crate::models::auth::{Identity, LoginRequest, RegisterRequest};
use crate::services::AuthService;

pub async fn register(
    service: web::Data<AuthService>,
    body: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    let token = service.register(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

pub async fn login(
    service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    let token = service.login(body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(token))
}

pub async fn me(service: web::Data<AuthService>, identity: Identity) -> Result<HttpResponse> {
    let account = service.me(&identity).await?;
    Ok(HttpResponse::Ok().json(account))
}

// 配置路由
pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .service(
                web::scope("")
                    .wrap(middlewares::RequireJWT)
                    .route("/me", web::get().to(me)),
            ),
    );
}
