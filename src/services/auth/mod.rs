pub mod guard;
pub mod login;
pub mod profile;
pub mod register;

use std::sync::Arc;

use crate::config::Argon2Config;
use crate::errors::Result;
use crate::models::accounts::entities::Account;
use crate::models::auth::{Identity, LoginRequest, RegisterRequest, TokenResponse};
use crate::storage::Storage;
use crate::utils::TokenService;

pub use guard::AccessGuard;

pub struct AuthService {
    storage: Arc<dyn Storage>,
    tokens: TokenService,
    argon2: Argon2Config,
}

impl AuthService {
    pub fn new(storage: Arc<dyn Storage>, tokens: TokenService, argon2: Argon2Config) -> Self {
        Self {
            storage,
            tokens,
            argon2,
        }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) fn argon2(&self) -> &Argon2Config {
        &self.argon2
    }

    // 自助注册
    pub async fn register(&self, request: RegisterRequest) -> Result<TokenResponse> {
        register::handle_register(self, request).await
    }

    // 登录验证
    pub async fn login(&self, request: LoginRequest) -> Result<TokenResponse> {
        login::handle_login(self, request).await
    }

    // 获取当前账户信息
    pub async fn me(&self, identity: &Identity) -> Result<Account> {
        profile::handle_me(self, identity).await
    }

    /// 为账户签发令牌并组装响应
    pub(crate) fn token_for(&self, account: &Account) -> Result<TokenResponse> {
        let access_token = self
            .tokens
            .issue(account.id, &account.contact, &account.role)?;
        Ok(TokenResponse::bearer(access_token, account.role, account.id))
    }
}
