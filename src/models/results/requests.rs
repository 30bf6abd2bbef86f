use serde::Deserialize;

use crate::errors::{ExamSystemError, Result};

// 成绩创建/更新请求
#[derive(Debug, Clone, Deserialize)]
pub struct ResultRequest {
    pub student_id: i64,
    pub exam_id: i64,
    pub score: f64,
}

impl ResultRequest {
    pub fn validate(&self) -> Result<()> {
        if !self.score.is_finite() || self.score < 0.0 {
            return Err(ExamSystemError::validation(
                "Score must be a non-negative number",
            ));
        }
        Ok(())
    }
}
