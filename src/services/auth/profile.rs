use crate::errors::{ExamSystemError, Result};
use crate::models::{accounts::entities::Account, auth::Identity};

use super::AuthService;

pub async fn handle_me(service: &AuthService, identity: &Identity) -> Result<Account> {
    service
        .storage()
        .get_account_by_id(identity.account_id)
        .await?
        .ok_or_else(|| ExamSystemError::authentication("Account not found"))
}
