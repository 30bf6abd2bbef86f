use serde::Deserialize;

// 自助注册请求
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub fullname: String,
    #[serde(default)]
    pub password: String,
    /// 缺省为 student；以字符串接收，便于返回统一的角色校验错误
    pub role: Option<String>,
}

// 登录请求
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// 联系方式（邮箱或手机号）
    #[serde(default)]
    pub contact: String,
    /// 密码
    #[serde(default)]
    pub password: String,
}
