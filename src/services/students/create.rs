use tracing::info;

use crate::errors::Result;
use crate::models::{
    accounts::entities::Role,
    auth::Identity,
    students::{entities::Student, requests::StudentRequest},
};
use crate::storage::Storage;

use super::StudentService;

pub async fn create_student(
    service: &StudentService,
    identity: &Identity,
    request: StudentRequest,
) -> Result<Student> {
    identity.require_staff()?;
    request.validate()?;

    let storage = service.storage();
    let account_id = match request.email.as_deref() {
        Some(email) => find_linkable_account(&**storage, email).await?,
        None => None,
    };

    let student = storage
        .create_student(request.into_create(account_id))
        .await?;

    info!(
        "Student {} created by account {} (linked account: {:?})",
        student.id, identity.account_id, student.account_id
    );

    Ok(student)
}

/// 查找可关联的学生账户：联系方式等于邮箱、角色为学生且尚未关联学生档案
async fn find_linkable_account(storage: &dyn Storage, email: &str) -> Result<Option<i64>> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(None);
    }

    let Some(account) = storage.get_account_by_contact(email).await? else {
        return Ok(None);
    };

    if account.role != Role::Student {
        return Ok(None);
    }

    let already_linked = storage.get_student_by_account_id(account.id).await?.is_some();
    Ok((!already_linked).then_some(account.id))
}
