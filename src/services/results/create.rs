use tracing::info;

use crate::errors::Result;
use crate::models::{
    auth::Identity,
    results::{entities::ResultDetail, requests::ResultRequest},
};

use super::ResultService;

pub async fn create_result(
    service: &ResultService,
    identity: &Identity,
    request: ResultRequest,
) -> Result<ResultDetail> {
    identity.require_staff()?;
    request.validate()?;

    let (student_name, exam_title) = service.resolve_references(&request).await?;
    let result = service.storage().create_result(request).await?;

    info!(
        "Result {} recorded for student {} on exam {} by account {}",
        result.id, result.student_id, result.exam_id, identity.account_id
    );

    Ok(ResultDetail::from_parts(
        result,
        Some(student_name),
        Some(exam_title),
    ))
}
