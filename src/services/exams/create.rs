use tracing::info;

use crate::errors::Result;
use crate::models::{
    auth::Identity,
    exams::{entities::Exam, requests::ExamRequest},
};

use super::ExamService;

pub async fn create_exam(
    service: &ExamService,
    identity: &Identity,
    request: ExamRequest,
) -> Result<Exam> {
    identity.require_staff()?;
    request.validate()?;

    let exam = service.storage().create_exam(request).await?;
    info!("Exam {} created by account {}", exam.id, identity.account_id);
    Ok(exam)
}
