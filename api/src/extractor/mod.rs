use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use kernel::model::{auth::AccessToken, id::UserId};
use registry::AppRegistry;
use shared::error::AppError;

/// セッションが有効なユーザー。
/// Authorization ヘッダーのベアラートークンをセッションと突き合わせ、
/// 無効なら 401 を返す
pub struct AuthorizedUser {
    pub access_token: AccessToken,
    pub user_id: UserId,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user_id
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .ok_or(AppError::UnauthenticatedError)?;
        let access_token = AccessToken(token.to_string());

        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&access_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            access_token,
            user_id,
        })
    }
}
