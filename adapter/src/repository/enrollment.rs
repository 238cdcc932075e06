use async_trait::async_trait;
use derive_new::new;
use kernel::model::{enrollment::Enrollment, id::UserId};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::enrollment::EnrollmentRow, ConnectionPool};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn find_with_address_by_user_id(
        &self,
        user_id: UserId,
    ) -> AppResult<Option<Enrollment>> {
        let row: Option<EnrollmentRow> = sqlx::query_as(
            r#"
                SELECT
                    e.id AS enrollment_id,
                    e.user_id,
                    e.name,
                    a.street,
                    a.number,
                    a.city,
                    a.state,
                    a.postal_code
                FROM enrollments AS e
                LEFT JOIN addresses AS a ON a.enrollment_id = e.id
                WHERE e.user_id = $1
                LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Enrollment::from))
    }
}
