use crate::errors::Result;
use crate::models::{
    accounts::entities::{Account, Role},
    auth::Identity,
};

use super::AccountService;

pub async fn list_accounts(service: &AccountService, identity: &Identity) -> Result<Vec<Account>> {
    identity.require_any_role(Role::admin_roles())?;
    service.storage().list_accounts().await
}
