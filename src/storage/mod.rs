use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::models::{
    accounts::{entities::Account, requests::CreateAccountRequest},
    exams::{entities::Exam, requests::ExamRequest},
    results::{
        entities::{ExamResult, ResultDetail},
        requests::ResultRequest,
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 账户管理方法
    // 创建账户
    async fn create_account(&self, account: CreateAccountRequest) -> Result<Account>;
    // 在同一事务中创建账户及其关联学生（学生的 account_id 由存储层填入）
    async fn create_account_with_student(
        &self,
        account: CreateAccountRequest,
        student: Option<CreateStudentRequest>,
    ) -> Result<(Account, Option<Student>)>;
    // 通过ID获取账户
    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>>;
    // 通过联系方式获取账户
    async fn get_account_by_contact(&self, contact: &str) -> Result<Option<Account>>;
    // 同时匹配ID与联系方式
    async fn get_account_by_id_and_contact(
        &self,
        id: i64,
        contact: &str,
    ) -> Result<Option<Account>>;
    // 列出账户
    async fn list_accounts(&self) -> Result<Vec<Account>>;
    // 删除账户（关联学生保留，解除关联）
    async fn delete_account(&self, id: i64) -> Result<bool>;

    /// 学生管理方法
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student>;
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    async fn get_student_by_account_id(&self, account_id: i64) -> Result<Option<Student>>;
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn update_student(&self, id: i64, update: StudentRequest) -> Result<Option<Student>>;
    // 删除学生及其成绩
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 考试管理方法
    async fn create_exam(&self, exam: ExamRequest) -> Result<Exam>;
    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>>;
    async fn list_exams(&self) -> Result<Vec<Exam>>;
    async fn update_exam(&self, id: i64, update: ExamRequest) -> Result<Option<Exam>>;
    // 删除考试及其成绩
    async fn delete_exam(&self, id: i64) -> Result<bool>;

    /// 成绩管理方法
    async fn create_result(&self, result: ResultRequest) -> Result<ExamResult>;
    async fn get_result_by_id(&self, id: i64) -> Result<Option<ExamResult>>;
    // 列出成绩（带学生姓名与考试标题），可按学生过滤
    async fn list_results(&self, student_id: Option<i64>) -> Result<Vec<ResultDetail>>;
    async fn update_result(&self, id: i64, update: ResultRequest) -> Result<Option<ExamResult>>;
    async fn delete_result(&self, id: i64) -> Result<bool>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
