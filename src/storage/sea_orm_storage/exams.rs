use super::SeaOrmStorage;
use crate::entity::exams::{ActiveModel, Column, Entity as Exams};
use crate::entity::results::{Column as ResultColumn, Entity as Results};
use crate::errors::{ExamSystemError, Result};
use crate::models::exams::{entities::Exam, requests::ExamRequest};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建考试
    pub async fn create_exam_impl(&self, req: ExamRequest) -> Result<Exam> {
        let model = ActiveModel {
            title: Set(req.title.trim().to_string()),
            total_marks: Set(req.total_marks),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to create exam: {e}")))?;

        Ok(result.into_exam())
    }

    /// 通过 ID 获取考试
    pub async fn get_exam_by_id_impl(&self, id: i64) -> Result<Option<Exam>> {
        let result = Exams::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to query exam: {e}")))?;

        Ok(result.map(|m| m.into_exam()))
    }

    /// 列出全部考试
    pub async fn list_exams_impl(&self) -> Result<Vec<Exam>> {
        let exams = Exams::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to list exams: {e}")))?;

        Ok(exams.into_iter().map(|m| m.into_exam()).collect())
    }

    /// 更新考试，只修改标题与总分
    pub async fn update_exam_impl(&self, id: i64, update: ExamRequest) -> Result<Option<Exam>> {
        if self.get_exam_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Unchanged(id),
            title: Set(update.title.trim().to_string()),
            total_marks: Set(update.total_marks),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to update exam: {e}")))?;

        self.get_exam_by_id_impl(id).await
    }

    /// 删除考试及其全部成绩
    pub async fn delete_exam_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to begin transaction: {e}"))
        })?;

        Results::delete_many()
            .filter(ResultColumn::ExamId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                ExamSystemError::database_operation(format!("Failed to delete exam results: {e}"))
            })?;

        let result = Exams::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to delete exam: {e}")))?;

        txn.commit().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to commit exam deletion: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }
}
