pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::{ExamSystemError, Result};
use crate::models::{
    auth::Identity,
    students::{entities::Student, requests::StudentRequest},
};
use crate::storage::Storage;

pub struct StudentService {
    storage: Arc<dyn Storage>,
}

impl StudentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 读取学生，不存在时返回 404
    pub(crate) async fn require_student(&self, student_id: i64) -> Result<Student> {
        self.storage
            .get_student_by_id(student_id)
            .await?
            .ok_or_else(|| ExamSystemError::not_found("Student not found"))
    }

    // 获取学生列表
    pub async fn list_students(&self, identity: &Identity) -> Result<Vec<Student>> {
        list::list_students(self, identity).await
    }

    // 创建学生
    pub async fn create_student(
        &self,
        identity: &Identity,
        request: StudentRequest,
    ) -> Result<Student> {
        create::create_student(self, identity, request).await
    }

    // 更新学生信息
    pub async fn update_student(
        &self,
        identity: &Identity,
        student_id: i64,
        request: StudentRequest,
    ) -> Result<Student> {
        update::update_student(self, identity, student_id, request).await
    }

    // 删除学生
    pub async fn delete_student(&self, identity: &Identity, student_id: i64) -> Result<()> {
        delete::delete_student(self, identity, student_id).await
    }
}
