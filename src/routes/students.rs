use actix_web::{HttpResponse, web};

use crate::errors::Result;
use crate::middlewares;
use crate::models::{ApiResponse, auth::Identity, students::requests::StudentRequest};
use crate::services::StudentService;

pub async fn list_students(
    service: web::Data<StudentService>,
    identity: Identity,
) -> Result<HttpResponse> {
    let students = service.list_students(&identity).await?;
    Ok(HttpResponse::Ok().json(students))
}

pub async fn create_student(
    service: web::Data<StudentService>,
    identity: Identity,
    body: web::Json<StudentRequest>,
) -> Result<HttpResponse> {
    let student = service.create_student(&identity, body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(student))
}

pub async fn update_student(
    service: web::Data<StudentService>,
    identity: Identity,
    student_id: web::Path<i64>,
    body: web::Json<StudentRequest>,
) -> Result<HttpResponse> {
    let student = service
        .update_student(&identity, student_id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(student))
}

pub async fn delete_student(
    service: web::Data<StudentService>,
    identity: Identity,
    student_id: web::Path<i64>,
) -> Result<HttpResponse> {
    service
        .delete_student(&identity, student_id.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Student deleted")))
}

// 配置路由
pub fn configure_student_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/students")
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_students))
            .route("", web::post().to(create_student))
            .route("/{id}", web::put().to(update_student))
            .route("/{id}", web::delete().to(delete_student)),
    );
}
