//! 凭据存储：密码哈希与校验

use crate::config::Argon2Config;
use crate::errors::{ExamSystemError, Result};
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 密码最小长度
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// 哈希密码
pub fn hash_password(password: &str, config: &Argon2Config) -> Result<String> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ExamSystemError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| ExamSystemError::password_hash(format!("Invalid Argon2 parameters: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ExamSystemError::password_hash(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码，哈希格式错误或不匹配时均返回 false
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}
