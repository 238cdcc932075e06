use async_trait::async_trait;
use derive_new::new;
use kernel::model::{id::RoomId, room::Room};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::room::RoomRow, ConnectionPool};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_room_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>> {
        let row: Option<RoomRow> = sqlx::query_as(
            r#"
                SELECT
                    r.id AS room_id,
                    r.hotel_id,
                    r.name AS room_name,
                    r.capacity,
                    COUNT(b.id) AS occupancy,
                    r.created_at,
                    r.updated_at
                FROM rooms AS r
                LEFT JOIN bookings AS b ON b.room_id = r.id
                WHERE r.id = $1
                GROUP BY r.id
            "#,
        )
        .bind(room_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Room::from))
    }
}
