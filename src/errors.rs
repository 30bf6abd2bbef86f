//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，每个错误同时携带业务错误码与 HTTP 状态码，
//! 因此处理函数可以直接用 `?` 把错误交给 actix-web 渲染。

use std::fmt;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回业务错误码
/// - error_type() 方法 - 返回错误类型名称
/// - status() 方法 - 返回 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_exam_system_errors {
    ($(
        $variant:ident($code:ident, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ExamSystemError {
            $($variant(String),)*
        }

        impl ExamSystemError {
            /// 获取业务错误码
            pub fn code(&self) -> ErrorCode {
                match self {
                    $(ExamSystemError::$variant(_) => ErrorCode::$code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ExamSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取 HTTP 状态码
            pub fn status(&self) -> StatusCode {
                match self {
                    $(ExamSystemError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ExamSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ExamSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ExamSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_exam_system_errors! {
    DatabaseConfig(InternalServerError, "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection(InternalServerError, "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation(InternalServerError, "Database Operation Error", INTERNAL_SERVER_ERROR),
    PasswordHash(InternalServerError, "Password Hash Error", INTERNAL_SERVER_ERROR),
    TokenGeneration(InternalServerError, "Token Generation Error", INTERNAL_SERVER_ERROR),
    Validation(ValidationFailed, "Validation Error", BAD_REQUEST),
    Authentication(Unauthenticated, "Authentication Error", UNAUTHORIZED),
    Authorization(Forbidden, "Authorization Error", FORBIDDEN),
    NotFound(NotFound, "Resource Not Found", NOT_FOUND),
    Conflict(Conflict, "Conflict", CONFLICT),
}

impl ExamSystemError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 是否为服务端内部错误
    pub fn is_internal(&self) -> bool {
        self.status().is_server_error()
    }
}

impl fmt::Display for ExamSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ExamSystemError {}

impl ResponseError for ExamSystemError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        // 内部错误的细节只写日志，不返回给调用方
        let message = if self.is_internal() {
            error!("{}", self.format_simple());
            "Internal server error"
        } else {
            self.message()
        };

        HttpResponse::build(self.status()).json(ApiResponse::error_empty(self.code(), message))
    }
}

// 数据库错误统一映射为内部错误
impl From<sea_orm::DbErr> for ExamSystemError {
    fn from(err: sea_orm::DbErr) -> Self {
        ExamSystemError::DatabaseOperation(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExamSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            ExamSystemError::validation("test").code(),
            ErrorCode::ValidationFailed
        );
        assert_eq!(
            ExamSystemError::authentication("test").code(),
            ErrorCode::Unauthenticated
        );
        assert_eq!(
            ExamSystemError::database_operation("test").code(),
            ErrorCode::InternalServerError
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ExamSystemError::validation("x").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ExamSystemError::authentication("x").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ExamSystemError::authorization("x").status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ExamSystemError::not_found("x").status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ExamSystemError::conflict("x").status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_error_message() {
        let err = ExamSystemError::not_found("Exam not found");
        assert_eq!(err.message(), "Exam not found");
        assert!(!err.is_internal());
        assert!(ExamSystemError::password_hash("boom").is_internal());
    }

    #[test]
    fn test_format_simple() {
        let err = ExamSystemError::conflict("Contact already registered");
        let formatted = err.format_simple();
        assert!(formatted.contains("Conflict"));
        assert!(formatted.contains("Contact already registered"));
    }

    #[test]
    fn test_error_response_hides_internal_detail() {
        let response = ExamSystemError::database_operation("secret table name").error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ExamSystemError::authorization("No permission").error_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
