//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accounts;
mod exams;
mod results;
mod students;

use crate::config::DatabaseConfig;
use crate::errors::{ExamSystemError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None).await.map_err(|e| {
            ExamSystemError::database_operation(format!("Database migration failed: {e}"))
        })?;

        info!("SeaORM storage initialised, database: {}", redact_url(&db_url));

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| {
                ExamSystemError::database_config(format!("Invalid SQLite URL: {e}"))
            })?
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                ExamSystemError::database_connection(format!("SQLite connection failed: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            ExamSystemError::database_connection(format!("Unable to connect to database: {e}"))
        })
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ExamSystemError::database_config(format!(
                "Cannot infer database type from URL: {}. Supported: sqlite:, postgres://, mysql://, or a .db/.sqlite file path",
                redact_url(url)
            )))
        }
    }
}

/// 写操作失败时把唯一约束冲突转换为 Conflict
pub(crate) fn map_write_error(err: DbErr, context: &str, conflict_message: &str) -> ExamSystemError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => ExamSystemError::conflict(conflict_message),
        _ => ExamSystemError::database_operation(format!("{context}: {err}")),
    }
}

/// 去掉连接串中的密码再写日志
fn redact_url(url: &str) -> String {
    match (url.find("://"), url.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            let credentials = &url[scheme_end + 3..at];
            match credentials.find(':') {
                Some(colon) => format!(
                    "{}{}:***{}",
                    &url[..scheme_end + 3],
                    &credentials[..colon],
                    &url[at..]
                ),
                None => url.to_string(),
            }
        }
        _ => url.to_string(),
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 账户模块
    async fn create_account(&self, account: CreateAccountRequest) -> Result<Account> {
        self.create_account_impl(account).await
    }

    async fn create_account_with_student(
        &self,
        account: CreateAccountRequest,
        student: Option<CreateStudentRequest>,
    ) -> Result<(Account, Option<Student>)> {
        self.create_account_with_student_impl(account, student).await
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.get_account_by_id_impl(id).await
    }

    async fn get_account_by_contact(&self, contact: &str) -> Result<Option<Account>> {
        self.get_account_by_contact_impl(contact).await
    }

    async fn get_account_by_id_and_contact(
        &self,
        id: i64,
        contact: &str,
    ) -> Result<Option<Account>> {
        self.get_account_by_id_and_contact_impl(id, contact).await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.list_accounts_impl().await
    }

    async fn delete_account(&self, id: i64) -> Result<bool> {
        self.delete_account_impl(id).await
    }

    // 学生模块
    async fn create_student(&self, student: CreateStudentRequest) -> Result<Student> {
        self.create_student_impl(student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_account_id(&self, account_id: i64) -> Result<Option<Student>> {
        self.get_student_by_account_id_impl(account_id).await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.list_students_impl().await
    }

    async fn update_student(&self, id: i64, update: StudentRequest) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 考试模块
    async fn create_exam(&self, exam: ExamRequest) -> Result<Exam> {
        self.create_exam_impl(exam).await
    }

    async fn get_exam_by_id(&self, id: i64) -> Result<Option<Exam>> {
        self.get_exam_by_id_impl(id).await
    }

    async fn list_exams(&self) -> Result<Vec<Exam>> {
        self.list_exams_impl().await
    }

    async fn update_exam(&self, id: i64, update: ExamRequest) -> Result<Option<Exam>> {
        self.update_exam_impl(id, update).await
    }

    async fn delete_exam(&self, id: i64) -> Result<bool> {
        self.delete_exam_impl(id).await
    }

    // 成绩模块
    async fn create_result(&self, result: ResultRequest) -> Result<ExamResult> {
        self.create_result_impl(result).await
    }

    async fn get_result_by_id(&self, id: i64) -> Result<Option<ExamResult>> {
        self.get_result_by_id_impl(id).await
    }

    async fn list_results(&self, student_id: Option<i64>) -> Result<Vec<ResultDetail>> {
        self.list_results_impl(student_id).await
    }

    async fn update_result(&self, id: i64, update: ResultRequest) -> Result<Option<ExamResult>> {
        self.update_result_impl(id, update).await
    }

    async fn delete_result(&self, id: i64) -> Result<bool> {
        self.delete_result_impl(id).await
    }
}
