use serde::{Deserialize, Serialize};

// 考试实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Exam {
    pub id: i64,
    pub title: String,
    pub total_marks: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
