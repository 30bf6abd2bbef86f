use crate::errors::{ExamSystemError, Result};
use crate::models::{
    auth::Identity,
    exams::{entities::Exam, requests::ExamRequest},
};

use super::ExamService;

pub async fn update_exam(
    service: &ExamService,
    identity: &Identity,
    exam_id: i64,
    request: ExamRequest,
) -> Result<Exam> {
    service.require_exam(exam_id).await?;
    identity.require_staff()?;
    request.validate()?;

    service
        .storage()
        .update_exam(exam_id, request)
        .await?
        .ok_or_else(|| ExamSystemError::not_found("Exam not found"))
}
