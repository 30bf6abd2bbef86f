use tracing::info;

use crate::errors::{ExamSystemError, Result};
use crate::models::auth::Identity;

use super::StudentService;

pub async fn delete_student(
    service: &StudentService,
    identity: &Identity,
    student_id: i64,
) -> Result<()> {
    service.require_student(student_id).await?;
    identity.require_staff()?;

    if !service.storage().delete_student(student_id).await? {
        return Err(ExamSystemError::not_found("Student not found"));
    }

    info!(
        "Student {} deleted by account {}",
        student_id, identity.account_id
    );
    Ok(())
}
