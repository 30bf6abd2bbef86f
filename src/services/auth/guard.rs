//! 访问守卫：把 `Authorization` 头转换为经过校验的 [`Identity`]
//!
//! 除了校验令牌签名与有效期外，还会回查账户是否仍然存在且联系方式一致，
//! 因此账户被删除后，尚未过期的旧令牌也会立即失效。

use std::sync::Arc;

use tracing::info;

use crate::errors::{ExamSystemError, Result};
use crate::models::auth::Identity;
use crate::storage::Storage;
use crate::utils::TokenService;

const BEARER_SCHEME: &str = "Bearer";

#[derive(Clone)]
pub struct AccessGuard {
    tokens: TokenService,
    storage: Arc<dyn Storage>,
}

impl AccessGuard {
    pub fn new(tokens: TokenService, storage: Arc<dyn Storage>) -> Self {
        Self { tokens, storage }
    }

    /// 校验原始 `Authorization` 头
    pub async fn authenticate(&self, header: Option<&str>) -> Result<Identity> {
        let token = header
            .and_then(extract_bearer)
            .ok_or_else(|| ExamSystemError::authentication("Not authenticated"))?;

        let identity = self.tokens.verify(token)?;

        let account = self
            .storage
            .get_account_by_id_and_contact(identity.account_id, &identity.contact)
            .await?;

        if account.is_none() {
            info!(
                "Token for account {} rejected: account no longer exists",
                identity.account_id
            );
            return Err(ExamSystemError::authentication("Account not found"));
        }

        Ok(identity)
    }
}

/// 取出 Bearer 令牌，scheme 不区分大小写
fn extract_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case(BEARER_SCHEME) && !token.is_empty()).then_some(token)
}
