use serde::Serialize;

use crate::errors::{ExamSystemError, Result};
use crate::models::accounts::entities::Role;

/// 经过校验的令牌身份，仅在单个请求内有效，从不持久化
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Identity {
    pub account_id: i64,
    pub contact: String,
    pub role: Role,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

impl Identity {
    pub fn has_role(&self, role: &Role) -> bool {
        &self.role == role
    }

    pub fn has_any_role(&self, roles: &[&Role]) -> bool {
        roles.iter().any(|role| self.has_role(role))
    }

    /// 要求当前身份具有任一角色，否则返回 403
    pub fn require_any_role(&self, roles: &[&Role]) -> Result<()> {
        if self.has_any_role(roles) {
            Ok(())
        } else {
            tracing::info!(
                "Access denied for account {} (role: {}). Required roles: {:?}",
                self.account_id,
                self.role,
                roles
            );
            Err(ExamSystemError::authorization("No permission"))
        }
    }

    pub fn require_staff(&self) -> Result<()> {
        self.require_any_role(Role::staff_roles())
    }
}
