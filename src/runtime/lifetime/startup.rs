use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::accounts::{entities::Role, requests::CreateAccountRequest};
use crate::services::{
    AccessGuard, AccountService, AuthService, ExamService, ResultService, StudentService,
};
use crate::storage::Storage;
use crate::utils::{TokenService, password::hash_password};
use actix_web::web;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// 启动阶段构造的共享状态，每个 worker 通过 [`StartupContext::configure`] 注册
#[derive(Clone)]
pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub guard: web::Data<AccessGuard>,
    pub auth: web::Data<AuthService>,
    pub students: web::Data<StudentService>,
    pub exams: web::Data<ExamService>,
    pub results: web::Data<ResultService>,
    pub accounts: web::Data<AccountService>,
}

impl StartupContext {
    /// 基于已初始化的存储构造全部服务
    pub fn new(storage: Arc<dyn Storage>, config: &AppConfig) -> Result<Self> {
        let tokens = TokenService::from_config(config)?;

        Ok(Self {
            guard: web::Data::new(AccessGuard::new(tokens.clone(), storage.clone())),
            auth: web::Data::new(AuthService::new(
                storage.clone(),
                tokens,
                config.argon2.clone(),
            )),
            students: web::Data::new(StudentService::new(storage.clone())),
            exams: web::Data::new(ExamService::new(storage.clone())),
            results: web::Data::new(ResultService::new(storage.clone())),
            accounts: web::Data::new(AccountService::new(storage.clone())),
            storage,
        })
    }

    /// 注册到 actix-web 应用
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.guard.clone())
            .app_data(self.auth.clone())
            .app_data(self.students.clone())
            .app_data(self.exams.clone())
            .app_data(self.results.clone())
            .app_data(self.accounts.clone());
    }
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// 初始化管理员账号
/// 如果不存在配置中联系方式对应的账户，则创建一个 admin 账户
pub async fn seed_admin(storage: &Arc<dyn Storage>, config: &AppConfig) -> Result<()> {
    let admin = &config.admin;
    let contact = admin.contact.trim();

    if storage.get_account_by_contact(contact).await?.is_some() {
        debug!("Admin account {} already exists, skipping seed", contact);
        return Ok(());
    }

    info!("No admin account found, creating {}", contact);

    // 未配置密码时生成随机密码
    let password = if admin.password.is_empty() {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    } else {
        admin.password.clone()
    };

    let password_hash = hash_password(&password, &config.argon2)?;

    let account = storage
        .create_account(CreateAccountRequest {
            contact: contact.to_string(),
            fullname: admin.name.trim().to_string(),
            password_hash,
            role: Role::Admin,
        })
        .await?;

    info!(
        "Admin account created successfully (ID: {}, contact: {})",
        account.id, account.contact
    );
    Ok(())
}

/// 准备服务器启动的上下文
/// 包括存储初始化、管理员账号与各业务服务
pub async fn prepare_server_startup(config: &AppConfig) -> Result<StartupContext> {
    // 已安装过时返回 Err，可以忽略
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    let storage = crate::storage::create_storage(&config.database).await?;
    warn!("Storage backend initialized and migrations completed");

    // 管理员初始化失败不阻止启动
    if let Err(e) = seed_admin(&storage, config).await {
        warn!("Failed to seed admin account: {}", e);
    }

    StartupContext::new(storage, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_random_password() {
        let password = generate_random_password(16);
        assert_eq!(password.chars().count(), 16);
        assert_ne!(password, generate_random_password(16));
    }
}
