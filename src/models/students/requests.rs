use serde::Deserialize;

use crate::errors::{ExamSystemError, Result};

pub const MAX_STUDENT_NUMBER_LENGTH: usize = 50;
pub const MAX_STUDENT_NAME_LENGTH: usize = 100;
pub const MAX_STUDENT_EMAIL_LENGTH: usize = 100;

// 学生创建/更新请求（来自HTTP请求）
#[derive(Debug, Clone, Deserialize)]
pub struct StudentRequest {
    pub student_number: String,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub grade: Option<f64>,
}

impl StudentRequest {
    pub fn validate(&self) -> Result<()> {
        if self.student_number.trim().is_empty() {
            return Err(ExamSystemError::validation("Student number is required"));
        }
        if self.student_number.trim().chars().count() > MAX_STUDENT_NUMBER_LENGTH {
            return Err(ExamSystemError::validation(format!(
                "Student number must be at most {MAX_STUDENT_NUMBER_LENGTH} characters"
            )));
        }
        if self.name.trim().is_empty() {
            return Err(ExamSystemError::validation("Student name is required"));
        }
        if self.name.trim().chars().count() > MAX_STUDENT_NAME_LENGTH {
            return Err(ExamSystemError::validation(format!(
                "Student name must be at most {MAX_STUDENT_NAME_LENGTH} characters"
            )));
        }
        if matches!(&self.email, Some(email) if email.chars().count() > MAX_STUDENT_EMAIL_LENGTH) {
            return Err(ExamSystemError::validation(format!(
                "Email must be at most {MAX_STUDENT_EMAIL_LENGTH} characters"
            )));
        }
        if matches!(self.age, Some(age) if age < 0) {
            return Err(ExamSystemError::validation("Age must not be negative"));
        }
        if matches!(self.grade, Some(grade) if !grade.is_finite()) {
            return Err(ExamSystemError::validation("Grade must be a number"));
        }
        Ok(())
    }

    pub fn into_create(self, account_id: Option<i64>) -> CreateStudentRequest {
        CreateStudentRequest {
            student_number: self.student_number.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email,
            age: self.age,
            grade: self.grade,
            account_id,
        }
    }
}

// 学生创建请求（用于存储层）
#[derive(Debug, Clone)]
pub struct CreateStudentRequest {
    pub student_number: String,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub grade: Option<f64>,
    pub account_id: Option<i64>,
}
