use tracing::info;

use crate::errors::{ExamSystemError, Result};
use crate::models::auth::Identity;

use super::ExamService;

pub async fn delete_exam(service: &ExamService, identity: &Identity, exam_id: i64) -> Result<()> {
    service.require_exam(exam_id).await?;
    identity.require_staff()?;

    if !service.storage().delete_exam(exam_id).await? {
        return Err(ExamSystemError::not_found("Exam not found"));
    }

    info!("Exam {} deleted by account {}", exam_id, identity.account_id);
    Ok(())
}
