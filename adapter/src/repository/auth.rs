use async_trait::async_trait;
use derive_new::new;
use kernel::model::{auth::AccessToken, id::UserId};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::database::ConnectionPool;

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(&self, token: &AccessToken) -> AppResult<Option<UserId>> {
        let user_id: Option<UserId> = sqlx::query_scalar(
            r#"
                SELECT user_id
                FROM sessions
                WHERE token = $1
            "#,
        )
        .bind(&token.0)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(user_id)
    }
}
