use crate::errors::{ExamSystemError, Result};
use crate::models::{
    auth::Identity,
    students::{entities::Student, requests::StudentRequest},
};

use super::StudentService;

pub async fn update_student(
    service: &StudentService,
    identity: &Identity,
    student_id: i64,
    request: StudentRequest,
) -> Result<Student> {
    // 先确认存在（404），再检查权限（403）
    service.require_student(student_id).await?;
    identity.require_staff()?;
    request.validate()?;

    service
        .storage()
        .update_student(student_id, request)
        .await?
        .ok_or_else(|| ExamSystemError::not_found("Student not found"))
}
