pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::{ExamSystemError, Result};
use crate::models::{
    auth::Identity,
    exams::{entities::Exam, requests::ExamRequest},
};
use crate::storage::Storage;

pub struct ExamService {
    storage: Arc<dyn Storage>,
}

impl ExamService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    pub(crate) async fn require_exam(&self, exam_id: i64) -> Result<Exam> {
        self.storage
            .get_exam_by_id(exam_id)
            .await?
            .ok_or_else(|| ExamSystemError::not_found("Exam not found"))
    }

    // 获取考试列表（所有已认证身份可见）
    pub async fn list_exams(&self, identity: &Identity) -> Result<Vec<Exam>> {
        list::list_exams(self, identity).await
    }

    // 创建考试
    pub async fn create_exam(&self, identity: &Identity, request: ExamRequest) -> Result<Exam> {
        create::create_exam(self, identity, request).await
    }

    // 更新考试
    pub async fn update_exam(
        &self,
        identity: &Identity,
        exam_id: i64,
        request: ExamRequest,
    ) -> Result<Exam> {
        update::update_exam(self, identity, exam_id, request).await
    }

    // 删除考试
    pub async fn delete_exam(&self, identity: &Identity, exam_id: i64) -> Result<()> {
        delete::delete_exam(self, identity, exam_id).await
    }
}
