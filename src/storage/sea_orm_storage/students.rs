use super::{SeaOrmStorage, map_write_error};
use crate::entity::results::{Column as ResultColumn, Entity as Results};
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{ExamSystemError, Result};
use crate::models::students::{
    entities::Student,
    requests::{CreateStudentRequest, StudentRequest},
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Unchanged, ColumnTrait, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

const STUDENT_NUMBER_CONFLICT: &str = "Student number already exists";

/// 学生可修改字段的显式映射，id、account_id 与 created_at 永远不会被请求覆盖
fn student_changes(id: i64, update: StudentRequest) -> ActiveModel {
    ActiveModel {
        id: Unchanged(id),
        student_number: Set(update.student_number.trim().to_string()),
        name: Set(update.name.trim().to_string()),
        email: Set(update.email),
        age: Set(update.age),
        grade: Set(update.grade),
        ..Default::default()
    }
}

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let model = ActiveModel {
            student_number: Set(req.student_number),
            name: Set(req.name),
            email: Set(req.email),
            age: Set(req.age),
            grade: Set(req.grade),
            created_at: Set(chrono::Utc::now().timestamp()),
            account_id: Set(req.account_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "Failed to create student", STUDENT_NUMBER_CONFLICT))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to query student: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过关联账户获取学生
    pub async fn get_student_by_account_id_impl(&self, account_id: i64) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::AccountId.eq(account_id))
            .one(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to query student: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 列出全部学生
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let students = Students::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to list students: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: StudentRequest,
    ) -> Result<Option<Student>> {
        // 先检查学生是否存在
        if self.get_student_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        student_changes(id, update)
            .update(&self.db)
            .await
            .map_err(|e| map_write_error(e, "Failed to update student", STUDENT_NUMBER_CONFLICT))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生及其全部成绩
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to begin transaction: {e}"))
        })?;

        Results::delete_many()
            .filter(ResultColumn::StudentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| {
                ExamSystemError::database_operation(format!("Failed to delete student results: {e}"))
            })?;

        let result = Students::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to delete student: {e}")))?;

        txn.commit().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to commit student deletion: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }
}
