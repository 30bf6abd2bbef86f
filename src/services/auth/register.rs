use tracing::info;

use crate::errors::{ExamSystemError, Result};
use crate::models::{
    accounts::{entities::Role, requests::CreateAccountRequest},
    auth::{RegisterRequest, TokenResponse},
    students::requests::{CreateStudentRequest, MAX_STUDENT_NAME_LENGTH},
};
use crate::utils::password::hash_password;

use super::AuthService;

pub const MAX_CONTACT_LENGTH: usize = 50;
pub const MAX_FULLNAME_LENGTH: usize = 150;

pub async fn handle_register(
    service: &AuthService,
    request: RegisterRequest,
) -> Result<TokenResponse> {
    // 1. 角色只允许 student / teacher，缺省为 student
    let role = parse_register_role(request.role.as_deref())?;

    let contact = request.contact.trim().to_string();
    let fullname = request.fullname.trim().to_string();
    validate_profile(&contact, &fullname, role)?;

    let storage = service.storage();

    // 2. 检查联系方式是否已注册
    if storage.get_account_by_contact(&contact).await?.is_some() {
        return Err(ExamSystemError::conflict("Contact already registered"));
    }

    // 3. 哈希密码（过短的密码在此被拒绝）
    let password_hash = hash_password(&request.password, service.argon2())?;

    // 4. 学生账户同时创建学生档案，学号与邮箱都沿用联系方式
    let student = (role == Role::Student).then(|| CreateStudentRequest {
        student_number: contact.clone(),
        name: fullname.clone(),
        email: Some(contact.clone()),
        age: None,
        grade: None,
        account_id: None,
    });

    let account = CreateAccountRequest {
        contact,
        fullname,
        password_hash,
        role,
    };

    // 并发注册同一联系方式时由唯一约束兜底，同样返回 Conflict
    let (account, student) = storage.create_account_with_student(account, student).await?;

    info!(
        "Account {} registered as {} (student record: {})",
        account.contact,
        account.role,
        student
            .map(|s| s.id.to_string())
            .unwrap_or_else(|| "none".to_string())
    );

    service.token_for(&account)
}

fn parse_register_role(role: Option<&str>) -> Result<Role> {
    let role = match role {
        None => return Ok(Role::Student),
        Some(role) => role.parse::<Role>().ok(),
    };

    match role {
        Some(role) if Role::self_register_roles().contains(&&role) => Ok(role),
        _ => Err(ExamSystemError::validation(
            "Role must be 'student' or 'teacher'",
        )),
    }
}

fn validate_profile(contact: &str, fullname: &str, role: Role) -> Result<()> {
    if contact.is_empty() {
        return Err(ExamSystemError::validation("Contact is required"));
    }
    if contact.chars().count() > MAX_CONTACT_LENGTH {
        return Err(ExamSystemError::validation(format!(
            "Contact must be at most {MAX_CONTACT_LENGTH} characters"
        )));
    }
    if fullname.is_empty() {
        return Err(ExamSystemError::validation("Full name is required"));
    }
    if fullname.chars().count() > MAX_FULLNAME_LENGTH {
        return Err(ExamSystemError::validation(format!(
            "Full name must be at most {MAX_FULLNAME_LENGTH} characters"
        )));
    }
    // 学生账户的姓名会写入学生档案，受学生姓名长度限制
    if role == Role::Student && fullname.chars().count() > MAX_STUDENT_NAME_LENGTH {
        return Err(ExamSystemError::validation(format!(
            "Full name must be at most {MAX_STUDENT_NAME_LENGTH} characters for students"
        )));
    }
    Ok(())
}
