use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::{booking::BookingRow, room::RoomOccupancyRow},
    ConnectionPool,
};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        let row: Option<BookingRow> = sqlx::query_as(
            r#"
                SELECT
                    b.id AS booking_id,
                    b.user_id,
                    b.updated_at AS booking_updated_at,
                    r.id AS room_id,
                    r.hotel_id,
                    r.name AS room_name,
                    r.capacity,
                    r.created_at AS room_created_at,
                    r.updated_at AS room_updated_at
                FROM bookings AS b
                INNER JOIN rooms AS r ON b.room_id = r.id
                WHERE b.user_id = $1
                ORDER BY b.id ASC
                LIMIT 1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Booking::from))
    }

    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // サービス側でも空き状況は確認済みだが、同じ部屋を狙う
        // 並行リクエスト同士が最後の 1 枠を取り合う可能性があるため、
        // 書き込みと同じトランザクション内で再確認する
        self.ensure_room_has_vacancy(&mut tx, event.room_id).await?;

        let booking_id: BookingId = sqlx::query_scalar(
            r#"
                INSERT INTO bookings (user_id, room_id)
                VALUES ($1, $2)
                RETURNING id
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(booking_id)
    }

    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // トランザクション分離レベルを SERIALIZABLE に設定する
        self.set_transaction_serializable(&mut tx).await?;

        // 付け替え先の部屋の空き状況も書き込みと同一トランザクションで再確認する
        self.ensure_room_has_vacancy(&mut tx, event.room_id).await?;

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET
                    room_id = $2,
                    updated_at = now()
                WHERE id = $1
            "#,
        )
        .bind(event.booking_id)
        .bind(event.room_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "booking ({}) was not found",
                event.booking_id
            )));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(event.booking_id)
    }
}

impl BookingRepositoryImpl {
    // create, update_room メソッドでのトランザクションを利用するにあたり
    // トランザクション分離レベルを SERIALIZABLE にするために
    // 内部的に使うメソッド
    async fn set_transaction_serializable(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ) -> AppResult<()> {
        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut **tx)
            .await
            .map_err(AppError::SpecificOperationError)?;
        Ok(())
    }

    // 対象の部屋が存在し、かつ満室でないことをトランザクション内で確認する
    async fn ensure_room_has_vacancy(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
    ) -> AppResult<()> {
        let row: Option<RoomOccupancyRow> = sqlx::query_as(
            r#"
                SELECT
                    r.capacity,
                    COUNT(b.id) AS occupancy
                FROM rooms AS r
                LEFT JOIN bookings AS b ON b.room_id = r.id
                WHERE r.id = $1
                GROUP BY r.id, r.capacity
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(room) = row else {
            return Err(AppError::EntityNotFound(format!(
                "room ({room_id}) was not found"
            )));
        };

        if room.is_full() {
            return Err(AppError::NoVacancy(format!(
                "room ({room_id}) is already at capacity"
            )));
        }

        Ok(())
    }
}
