use serde::{Deserialize, Serialize};

// 成绩实体（存储形态）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExamResult {
    pub id: i64,
    pub student_id: i64,
    pub exam_id: i64,
    pub score: f64,
    pub taken_at: chrono::DateTime<chrono::Utc>,
}

// 成绩详情（带学生姓名与考试标题的联表读取结果）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResultDetail {
    pub id: i64,
    pub student_id: i64,
    pub student_name: String,
    pub exam_id: i64,
    pub exam_title: String,
    pub score: f64,
    pub taken_at: chrono::DateTime<chrono::Utc>,
}

impl ResultDetail {
    /// 关联记录缺失时的占位名称
    pub const UNKNOWN: &'static str = "Unknown";

    pub fn from_parts(
        result: ExamResult,
        student_name: Option<String>,
        exam_title: Option<String>,
    ) -> Self {
        Self {
            id: result.id,
            student_id: result.student_id,
            student_name: student_name.unwrap_or_else(|| Self::UNKNOWN.to_string()),
            exam_id: result.exam_id,
            exam_title: exam_title.unwrap_or_else(|| Self::UNKNOWN.to_string()),
            score: result.score,
            taken_at: result.taken_at,
        }
    }
}
