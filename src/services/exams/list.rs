use tracing::debug;

use crate::errors::Result;
use crate::models::{auth::Identity, exams::entities::Exam};

use super::ExamService;

pub async fn list_exams(service: &ExamService, identity: &Identity) -> Result<Vec<Exam>> {
    debug!("Listing exams for account {}", identity.account_id);
    service.storage().list_exams().await
}
