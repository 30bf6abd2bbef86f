pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::{ExamSystemError, Result};
use crate::models::{
    auth::Identity,
    results::{
        entities::{ExamResult, ResultDetail},
        requests::ResultRequest,
    },
};
use crate::storage::Storage;

pub struct ResultService {
    storage: Arc<dyn Storage>,
}

impl ResultService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub(crate) fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// 按顺序确认学生与考试存在，并返回学生姓名与考试标题
    ///
    /// 学生先于考试检查，第一个缺失的决定 404 消息。
    pub(crate) async fn resolve_references(&self, request: &ResultRequest) -> Result<(String, String)> {
        let student = self
            .storage
            .get_student_by_id(request.student_id)
            .await?
            .ok_or_else(|| ExamSystemError::not_found("Student not found"))?;

        let exam = self
            .storage
            .get_exam_by_id(request.exam_id)
            .await?
            .ok_or_else(|| ExamSystemError::not_found("Exam not found"))?;

        Ok((student.name, exam.title))
    }

    pub(crate) async fn require_result(&self, result_id: i64) -> Result<ExamResult> {
        self.storage
            .get_result_by_id(result_id)
            .await?
            .ok_or_else(|| ExamSystemError::not_found("Result not found"))
    }

    // 获取成绩列表
    pub async fn list_results(&self, identity: &Identity) -> Result<Vec<ResultDetail>> {
        list::list_results(self, identity).await
    }

    // 录入成绩
    pub async fn create_result(
        &self,
        identity: &Identity,
        request: ResultRequest,
    ) -> Result<ResultDetail> {
        create::create_result(self, identity, request).await
    }

    // 更新成绩
    pub async fn update_result(
        &self,
        identity: &Identity,
        result_id: i64,
        request: ResultRequest,
    ) -> Result<ResultDetail> {
        update::update_result(self, identity, result_id, request).await
    }

    // 删除成绩
    pub async fn delete_result(&self, identity: &Identity, result_id: i64) -> Result<()> {
        delete::delete_result(self, identity, result_id).await
    }
}
