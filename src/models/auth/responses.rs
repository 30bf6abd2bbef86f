use serde::{Deserialize, Serialize};

use crate::models::accounts::entities::Role;

pub const TOKEN_TYPE_BEARER: &str = "bearer";

// 注册/登录成功后返回的令牌
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub role: Role,
    pub user_id: i64,
}

impl TokenResponse {
    pub fn bearer(access_token: String, role: Role, user_id: i64) -> Self {
        Self {
            access_token,
            token_type: TOKEN_TYPE_BEARER.to_string(),
            role,
            user_id,
        }
    }
}
