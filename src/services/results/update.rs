use crate::errors::{ExamSystemError, Result};
use crate::models::{
    auth::Identity,
    results::{entities::ResultDetail, requests::ResultRequest},
};

use super::ResultService;

pub async fn update_result(
    service: &ResultService,
    identity: &Identity,
    result_id: i64,
    request: ResultRequest,
) -> Result<ResultDetail> {
    service.require_result(result_id).await?;
    identity.require_staff()?;
    request.validate()?;

    let (student_name, exam_title) = service.resolve_references(&request).await?;

    let result = service
        .storage()
        .update_result(result_id, request)
        .await?
        .ok_or_else(|| ExamSystemError::not_found("Result not found"))?;

    Ok(ResultDetail::from_parts(
        result,
        Some(student_name),
        Some(exam_title),
    ))
}
