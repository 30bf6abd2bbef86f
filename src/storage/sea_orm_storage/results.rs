use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::exams::{Column as ExamColumn, Entity as Exams};
use crate::entity::results::{ActiveModel, Column, Entity as Results};
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{ExamSystemError, Result};
use crate::models::results::{
    entities::{ExamResult, ResultDetail},
    requests::ResultRequest,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建成绩（学生与考试的存在性由服务层先行校验）
    pub async fn create_result_impl(&self, req: ResultRequest) -> Result<ExamResult> {
        let model = ActiveModel {
            student_id: Set(req.student_id),
            exam_id: Set(req.exam_id),
            score: Set(req.score),
            taken_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to create result: {e}")))?;

        Ok(result.into_result())
    }

    /// 通过 ID 获取成绩
    pub async fn get_result_by_id_impl(&self, id: i64) -> Result<Option<ExamResult>> {
        let result = Results::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to query result: {e}")))?;

        Ok(result.map(|m| m.into_result()))
    }

    /// 列出成绩并补全学生姓名与考试标题
    pub async fn list_results_impl(&self, student_id: Option<i64>) -> Result<Vec<ResultDetail>> {
        let mut select = Results::find();

        if let Some(student_id) = student_id {
            select = select.filter(Column::StudentId.eq(student_id));
        }

        let rows = select
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to list results: {e}")))?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let student_ids: HashSet<i64> = rows.iter().map(|r| r.student_id).collect();
        let exam_ids: HashSet<i64> = rows.iter().map(|r| r.exam_id).collect();

        let student_names: HashMap<i64, String> = Students::find()
            .filter(StudentColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to load students: {e}")))?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        let exam_titles: HashMap<i64, String> = Exams::find()
            .filter(ExamColumn::Id.is_in(exam_ids))
            .all(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to load exams: {e}")))?
            .into_iter()
            .map(|e| (e.id, e.title))
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let student_name = student_names.get(&row.student_id).cloned();
                let exam_title = exam_titles.get(&row.exam_id).cloned();
                ResultDetail::from_parts(row.into_result(), student_name, exam_title)
            })
            .collect())
    }

    /// 更新成绩，只修改学生、考试与分数
    pub async fn update_result_impl(
        &self,
        id: i64,
        update: ResultRequest,
    ) -> Result<Option<ExamResult>> {
        if self.get_result_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Unchanged(id),
            student_id: Set(update.student_id),
            exam_id: Set(update.exam_id),
            score: Set(update.score),
            ..Default::default()
        };

        model
            .update(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to update result: {e}")))?;

        self.get_result_by_id_impl(id).await
    }

    /// 删除成绩
    pub async fn delete_result_impl(&self, id: i64) -> Result<bool> {
        let result = Results::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to delete result: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
