use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{auth::AccessToken, id::UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    // アクセストークンからセッション中のユーザー ID を引く
    async fn fetch_user_id_from_token(&self, token: &AccessToken) -> AppResult<Option<UserId>>;
}
