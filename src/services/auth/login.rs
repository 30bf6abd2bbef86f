use tracing::info;

use crate::errors::{ExamSystemError, Result};
use crate::models::auth::{LoginRequest, TokenResponse};
use crate::utils::password::verify_password;

use super::AuthService;

pub async fn handle_login(service: &AuthService, request: LoginRequest) -> Result<TokenResponse> {
    let contact = request.contact.trim();

    // 1. 必填字段
    if contact.is_empty() || request.password.is_empty() {
        return Err(ExamSystemError::validation(
            "Contact and password are required",
        ));
    }

    // 2. 账户不存在与密码错误返回同一个错误
    let account = service
        .storage()
        .get_account_by_contact(contact)
        .await?
        .filter(|account| verify_password(&request.password, &account.password_hash))
        .ok_or_else(|| {
            info!("Login rejected for contact {}", contact);
            ExamSystemError::authentication("Invalid credentials")
        })?;

    info!("Account {} logged in successfully", account.contact);

    // 3. 签发令牌
    service.token_for(&account)
}
