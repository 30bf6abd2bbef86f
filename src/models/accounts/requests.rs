use super::entities::Role;

// 账户创建请求（用于存储层，password_hash 已经过哈希）
#[derive(Debug, Clone)]
pub struct CreateAccountRequest {
    pub contact: String,
    pub fullname: String,
    pub password_hash: String,
    pub role: Role,
}
