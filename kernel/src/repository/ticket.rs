use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::EnrollmentId, ticket::Ticket};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketRepository: Send + Sync {
    // 参加登録に紐づくチケットをチケット種別ごと取得する
    async fn find_by_enrollment_id(&self, enrollment_id: EnrollmentId)
        -> AppResult<Option<Ticket>>;
}
