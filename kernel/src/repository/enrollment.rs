use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{enrollment::Enrollment, id::UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    // ユーザーのイベント参加登録を住所つきで取得する
    async fn find_with_address_by_user_id(&self, user_id: UserId)
        -> AppResult<Option<Enrollment>>;
}
