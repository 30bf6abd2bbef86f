pub mod delete;
pub mod list;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{accounts::entities::Account, auth::Identity};
use crate::storage::Storage;

/// 账户管理，仅管理员可用（由路由层的角色中间件保证）
pub struct AccountService {
    storage: Arc<dyn Storage>,
}

impl AccountService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    // 获取账户列表
    pub async fn list_accounts(&self, identity: &Identity) -> Result<Vec<Account>> {
        list::list_accounts(self, identity).await
    }

    // 删除账户
    pub async fn delete_account(&self, identity: &Identity, account_id: i64) -> Result<()> {
        delete::delete_account(self, identity, account_id).await
    }
}
