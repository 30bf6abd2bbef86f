use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares;
use crate::models::{ApiResponse, accounts::entities::Role, auth::Identity};
use crate::services::AccountService;

pub async fn list_accounts(
    service: web::Data<AccountService>,
    identity: Identity,
) -> Result<HttpResponse> {
    let accounts = service.list_accounts(&identity).await?;
    Ok(HttpResponse::Ok().json(accounts))
}

pub async fn delete_account(
    service: web::Data<AccountService>,
    identity: Identity,
    account_id: web::Path<i64>,
) -> Result<HttpResponse> {
    service
        .delete_account(&identity, account_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Account deleted")))
}

// 配置路由
pub fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/accounts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::scope("")
                    .wrap(middlewares::RequireRole::new_any(Role::admin_roles()))
                    .route("", web::get().to(list_accounts))
                    .route("/{id}", web::delete().to(delete_account)),
            ),
    );
}
