/// 业务错误码
///
/// 与 HTTP 状态码一起返回给客户端，便于前端区分同一状态码下的不同错误。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 请求错误
    ValidationFailed = 1001,

    // 认证与授权
    Unauthenticated = 2000,
    Forbidden = 2003,

    // 资源
    NotFound = 3000,
    Conflict = 3009,

    // 服务端
    InternalServerError = 5000,
}
