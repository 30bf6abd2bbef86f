use super::{SeaOrmStorage, map_write_error};
use crate::entity::accounts::{ActiveModel, Column, Entity as Accounts};
use crate::entity::students::{
    ActiveModel as StudentActiveModel, Column as StudentColumn, Entity as Students,
};
use crate::errors::{ExamSystemError, Result};
use crate::models::{
    accounts::{entities::Account, requests::CreateAccountRequest},
    students::{entities::Student, requests::CreateStudentRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use tracing::warn;

const CONTACT_CONFLICT: &str = "Contact already registered";

fn account_model(req: CreateAccountRequest, now: i64) -> ActiveModel {
    ActiveModel {
        contact: Set(req.contact),
        fullname: Set(req.fullname),
        password_hash: Set(req.password_hash),
        role: Set(req.role.to_string()),
        created_at: Set(now),
        ..Default::default()
    }
}

async fn insert_registration(
    txn: &DatabaseTransaction,
    req: CreateAccountRequest,
    student: Option<CreateStudentRequest>,
) -> Result<(Account, Option<Student>)> {
    let now = chrono::Utc::now().timestamp();

    let account = account_model(req, now)
        .insert(txn)
        .await
        .map_err(|e| map_write_error(e, "Failed to create account", CONTACT_CONFLICT))?;

    let student = match student {
        Some(student) => {
            let model = StudentActiveModel {
                student_number: Set(student.student_number),
                name: Set(student.name),
                email: Set(student.email),
                age: Set(student.age),
                grade: Set(student.grade),
                created_at: Set(now),
                account_id: Set(Some(account.id)),
                ..Default::default()
            };
            let inserted = model.insert(txn).await.map_err(|e| {
                map_write_error(
                    e,
                    "Failed to create linked student",
                    "Student number already exists",
                )
            })?;
            Some(inserted.into_student())
        }
        None => None,
    };

    Ok((account.into_account(), student))
}

impl SeaOrmStorage {
    /// 创建账户
    pub async fn create_account_impl(&self, req: CreateAccountRequest) -> Result<Account> {
        let now = chrono::Utc::now().timestamp();

        let result = account_model(req, now)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_error(e, "Failed to create account", CONTACT_CONFLICT))?;

        Ok(result.into_account())
    }

    /// 在一个事务中创建账户与关联学生，任一步失败都会整体回滚
    pub async fn create_account_with_student_impl(
        &self,
        req: CreateAccountRequest,
        student: Option<CreateStudentRequest>,
    ) -> Result<(Account, Option<Student>)> {
        let txn = self.db.begin().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to begin transaction: {e}"))
        })?;

        let created = match insert_registration(&txn, req, student).await {
            Ok(created) => created,
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    warn!("Failed to roll back registration: {}", rollback_err);
                }
                return Err(e);
            }
        };

        txn.commit().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to commit registration: {e}"))
        })?;

        Ok(created)
    }

    /// 通过 ID 获取账户
    pub async fn get_account_by_id_impl(&self, id: i64) -> Result<Option<Account>> {
        let result = Accounts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to query account: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 通过联系方式获取账户
    pub async fn get_account_by_contact_impl(&self, contact: &str) -> Result<Option<Account>> {
        let result = Accounts::find()
            .filter(Column::Contact.eq(contact))
            .one(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to query account: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 同时按 ID 与联系方式获取账户
    pub async fn get_account_by_id_and_contact_impl(
        &self,
        id: i64,
        contact: &str,
    ) -> Result<Option<Account>> {
        let result = Accounts::find()
            .filter(Column::Id.eq(id))
            .filter(Column::Contact.eq(contact))
            .one(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to query account: {e}")))?;

        Ok(result.map(|m| m.into_account()))
    }

    /// 列出账户
    pub async fn list_accounts_impl(&self) -> Result<Vec<Account>> {
        let accounts = Accounts::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to list accounts: {e}")))?;

        Ok(accounts.into_iter().map(|m| m.into_account()).collect())
    }

    /// 删除账户，关联学生保留但解除关联
    pub async fn delete_account_impl(&self, id: i64) -> Result<bool> {
        let txn = self.db.begin().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to begin transaction: {e}"))
        })?;

        Students::update_many()
            .col_expr(
                StudentColumn::AccountId,
                sea_orm::sea_query::Expr::value(Option::<i64>::None),
            )
            .filter(StudentColumn::AccountId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to unlink student: {e}")))?;

        let result = Accounts::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(|e| ExamSystemError::database_operation(format!("Failed to delete account: {e}")))?;

        txn.commit().await.map_err(|e| {
            ExamSystemError::database_operation(format!("Failed to commit account deletion: {e}"))
        })?;

        Ok(result.rows_affected > 0)
    }
}
