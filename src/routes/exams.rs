use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares;
use crate::models::{ApiResponse, auth::Identity, exams::requests::ExamRequest};
use crate::services::ExamService;

pub async fn list_exams(
    service: web::Data<ExamService>,
    identity: Identity,
) -> Result<HttpResponse> {
    let exams = service.list_exams(&identity).await?;
    Ok(HttpResponse::Ok().json(exams))
}

pub async fn create_exam(
    service: web::Data<ExamService>,
    identity: Identity,
    body: web::Json<ExamRequest>,
) -> Result<HttpResponse> {
    let exam = service.create_exam(&identity, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(exam))
}

pub async fn update_exam(
    service: web::Data<ExamService>,
    identity: Identity,
    exam_id: web::Path<i64>,
    body: web::Json<ExamRequest>,
) -> Result<HttpResponse> {
    let exam = service
        .update_exam(&identity, exam_id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(exam))
}

pub async fn delete_exam(
    service: web::Data<ExamService>,
    identity: Identity,
    exam_id: web::Path<i64>,
) -> Result<HttpResponse> {
    service.delete_exam(&identity, exam_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Exam deleted")))
}

// 配置路由
pub fn configure_exam_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/exams")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_exams))
            .route("", web::post().to(create_exam))
            .route("/{id}", web::put().to(update_exam))
            .route("/{id}", web::delete().to(delete_exam)),
    );
}
