use tracing::info;

use crate::errors::{ExamSystemError, Result};
use crate::models::auth::Identity;

use super::ResultService;

pub async fn delete_result(
    service: &ResultService,
    identity: &Identity,
    result_id: i64,
) -> Result<()> {
    service.require_result(result_id).await?;
    identity.require_staff()?;

    if !service.storage().delete_result(result_id).await? {
        return Err(ExamSystemError::not_found("Result not found"));
    }

    info!(
        "Result {} deleted by account {}",
        result_id, identity.account_id
    );
    Ok(())
}
