use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares;
use crate::models::{ApiResponse, auth::Identity, results::requests::ResultRequest};
use crate::services::ResultService;

pub async fn list_results(
    service: web::Data<ResultService>,
    identity: Identity,
) -> Result<HttpResponse> {
    let results = service.list_results(&identity).await?;
    Ok(HttpResponse::Ok().json(results))
}

pub async fn create_result(
    service: web::Data<ResultService>,
    identity: Identity,
    body: web::Json<ResultRequest>,
) -> Result<HttpResponse> {
    let result = service.create_result(&identity, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn update_result(
    service: web::Data<ResultService>,
    identity: Identity,
    result_id: web::Path<i64>,
    body: web::Json<ResultRequest>,
) -> Result<HttpResponse> {
    let result = service
        .update_result(&identity, result_id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

pub async fn delete_result(
    service: web::Data<ResultService>,
    identity: Identity,
    result_id: web::Path<i64>,
) -> Result<HttpResponse> {
    service
        .delete_result(&identity, result_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Result deleted")))
}

// 配置路由
pub fn configure_result_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/results")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_results))
            .route("", web::post().to(create_result))
            .route("/{id}", web::put().to(update_result))
            .route("/{id}", web::delete().to(delete_result)),
    );
}
