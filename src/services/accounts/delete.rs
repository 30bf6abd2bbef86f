use tracing::warn;

use crate::errors::{ExamSystemError, Result};
use crate::models::{accounts::entities::Role, auth::Identity};

use super::AccountService;

pub async fn delete_account(
    service: &AccountService,
    identity: &Identity,
    account_id: i64,
) -> Result<()> {
    identity.require_any_role(Role::admin_roles())?;

    // 禁止删除当前登录的账户
    if account_id == identity.account_id {
        return Err(ExamSystemError::validation("Cannot delete current account"));
    }

    if !service.storage().delete_account(account_id).await? {
        return Err(ExamSystemError::not_found("Account not found"));
    }

    warn!(
        "Account {} deleted by admin {}",
        account_id, identity.account_id
    );
    Ok(())
}
