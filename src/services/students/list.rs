use crate::errors::Result;
use crate::models::{accounts::entities::Role, auth::Identity, students::entities::Student};

use super::StudentService;

pub async fn list_students(service: &StudentService, identity: &Identity) -> Result<Vec<Student>> {
    let storage = service.storage();

    // 学生只能看到与自己账户关联的档案
    if identity.role == Role::Student {
        let own = storage.get_student_by_account_id(identity.account_id).await?;
        return Ok(own.into_iter().collect());
    }

    storage.list_students().await
}
