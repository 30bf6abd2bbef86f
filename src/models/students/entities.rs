use serde::{Deserialize, Serialize};

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    pub id: i64,
    pub student_number: String,
    pub name: String,
    pub email: Option<String>,
    pub age: Option<i32>,
    pub grade: Option<f64>,
    /// 关联账户，自助注册的学生才有
    pub account_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
