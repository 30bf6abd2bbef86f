use crate::errors::Result;
use crate::models::{accounts::entities::Role, auth::Identity, results::entities::ResultDetail};

use super::ResultService;

pub async fn list_results(
    service: &ResultService,
    identity: &Identity,
) -> Result<Vec<ResultDetail>> {
    let storage = service.storage();

    if identity.role != Role::Student {
        return storage.list_results(None).await;
    }

    // 学生只能看到自己关联档案的成绩，没有关联档案时为空
    match storage.get_student_by_account_id(identity.account_id).await? {
        Some(student) => storage.list_results(Some(student.id)).await,
        None => Ok(Vec::new()),
    }
}
