use config::{Config, ConfigError, Environment, File};
use jsonwebtoken::Algorithm;
use std::str::FromStr;

use super::AppConfig;

impl AppConfig {
    /// 加载配置
    ///
    /// 结果只在启动时构造一次，随后以不可变引用显式传给各个服务。
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("app.system_name", "Online Exam Management API")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 262_144)?
            .set_default("jwt.secret", "")?
            .set_default("jwt.algorithm", "HS256")?
            .set_default("jwt.access_token_expiry", 30)?
            .set_default("database.url", "sqlite://exam_system.db?mode=rwc")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("cors.max_age", 3600)?
            .set_default("argon2.memory_cost", 19_456)?
            .set_default("argon2.time_cost", 2)?
            .set_default("argon2.parallelism", 1)?
            .set_default("admin.contact", "admin@example.com")?
            .set_default("admin.name", "Administrator")?
            .set_default("admin.password", "admin123")?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("EXAM")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量直接覆盖
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("jwt.secret", std::env::var("SECRET_KEY").ok())?
            .set_override_option("jwt.algorithm", std::env::var("ALGORITHM").ok())?
            .set_override_option(
                "jwt.access_token_expiry",
                std::env::var("ACCESS_TOKEN_EXPIRE_MINUTES").ok(),
            )?
            .set_override_option("admin.contact", std::env::var("ADMIN_CONTACT").ok())?
            .set_override_option("admin.name", std::env::var("ADMIN_NAME").ok())?
            .set_override_option("admin.password", std::env::var("ADMIN_PASSWORD").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;

        Ok(app_config)
    }

    /// 校验配置，必要时补全开发环境的签名密钥
    pub fn validate(&mut self) -> Result<(), ConfigError> {
        let algorithm = self.jwt_algorithm()?;
        if !matches!(
            algorithm,
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512
        ) {
            return Err(ConfigError::Message(format!(
                "jwt.algorithm must be one of HS256, HS384, HS512 (got {})",
                self.jwt.algorithm
            )));
        }

        if self.jwt.access_token_expiry < 0 {
            return Err(ConfigError::Message(
                "jwt.access_token_expiry must not be negative".to_string(),
            ));
        }

        if self.jwt.secret.is_empty() {
            if self.is_production() {
                return Err(ConfigError::Message(
                    "jwt.secret (SECRET_KEY) must be set in production".to_string(),
                ));
            }
            tracing::warn!(
                "SECRET_KEY not set, using a random signing secret; tokens will not survive a restart"
            );
            self.jwt.secret = generate_random_secret(48);
        }

        Ok(())
    }

    /// 解析签名算法
    pub fn jwt_algorithm(&self) -> Result<Algorithm, ConfigError> {
        Algorithm::from_str(&self.jwt.algorithm).map_err(|_| {
            ConfigError::Message(format!("Unknown jwt.algorithm: {}", self.jwt.algorithm))
        })
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn generate_random_secret(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}
