use serde::Deserialize;

use crate::errors::{ExamSystemError, Result};

pub const MAX_TITLE_LENGTH: usize = 150;

// 考试创建/更新请求
#[derive(Debug, Clone, Deserialize)]
pub struct ExamRequest {
    pub title: String,
    pub total_marks: i32,
}

impl ExamRequest {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ExamSystemError::validation("Exam title is required"));
        }
        if self.title.trim().chars().count() > MAX_TITLE_LENGTH {
            return Err(ExamSystemError::validation(format!(
                "Exam title must be at most {MAX_TITLE_LENGTH} characters"
            )));
        }
        if self.total_marks <= 0 {
            return Err(ExamSystemError::validation(
                "Total marks must be greater than zero",
            ));
        }
        Ok(())
    }
}
