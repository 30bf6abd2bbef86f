//! 令牌服务：签发与校验无状态的身份令牌
//!
//! 令牌载荷为 `{sub: contact, user_id, role, exp}`。服务端不保存会话，
//! 也不支持吊销，泄露的令牌在自然过期前一直有效。

use crate::config::AppConfig;
use crate::errors::{ExamSystemError, Result};
use crate::models::accounts::entities::Role;
use crate::models::auth::Identity;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,  // Subject (contact)
    pub user_id: i64, // 账户 ID
    pub role: String, // 账户角色
    pub exp: i64,     // Expiration time (时间戳)
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: chrono::Duration,
}

impl TokenService {
    pub fn new(secret: &str, algorithm: Algorithm, ttl: chrono::Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            ttl,
        }
    }

    /// 从已校验的配置构造
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let algorithm = config
            .jwt_algorithm()
            .map_err(|e| ExamSystemError::token_generation(e.to_string()))?;
        Ok(Self::new(
            &config.jwt.secret,
            algorithm,
            chrono::Duration::minutes(config.jwt.access_token_expiry),
        ))
    }

    /// 使用默认有效期签发令牌
    pub fn issue(&self, account_id: i64, contact: &str, role: &Role) -> Result<String> {
        self.issue_with_ttl(account_id, contact, role, self.ttl)
    }

    // 生成带自定义过期时间的 Token
    pub fn issue_with_ttl(
        &self,
        account_id: i64,
        contact: &str,
        role: &Role,
        ttl: chrono::Duration,
    ) -> Result<String> {
        let expiration = chrono::Utc::now() + ttl;
        let claims = Claims {
            sub: contact.to_string(),
            user_id: account_id,
            role: role.to_string(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| ExamSystemError::token_generation(format!("Failed to sign token: {e}")))
    }

    /// 校验令牌并还原身份
    ///
    /// 签名错误、格式错误、过期以及缺少必需声明统一返回同一个错误，
    /// 调用方无法据此区分失败原因。
    pub fn verify(&self, token: &str) -> Result<Identity> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Token rejected: {}", e);
                invalid_token()
            })?;

        // 有效期为 0 的令牌在签发的同一秒内也视为过期
        if claims.exp <= chrono::Utc::now().timestamp() {
            debug!("Token rejected: expired at {}", claims.exp);
            return Err(invalid_token());
        }

        if claims.sub.is_empty() || claims.user_id <= 0 {
            return Err(invalid_token());
        }

        let role = claims.role.parse::<Role>().map_err(|_| invalid_token())?;
        let expires_at =
            chrono::DateTime::<chrono::Utc>::from_timestamp(claims.exp, 0).ok_or_else(invalid_token)?;

        Ok(Identity {
            account_id: claims.user_id,
            contact: claims.sub,
            role,
            expires_at,
        })
    }
}

fn invalid_token() -> ExamSystemError {
    ExamSystemError::authentication("Invalid token")
}
