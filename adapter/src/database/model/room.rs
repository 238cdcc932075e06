use chrono::{DateTime, Utc};
use kernel::model::{
    id::{HotelId, RoomId},
    room::Room,
};

// 部屋を現在の予約件数つきで取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub room_name: String,
    pub capacity: i32,
    pub occupancy: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            hotel_id,
            room_name,
            capacity,
            occupancy,
            created_at,
            updated_at,
        } = value;
        Room {
            room_id,
            hotel_id,
            room_name,
            capacity,
            occupancy,
            created_at,
            updated_at,
        }
    }
}

// トランザクション内で空き状況を再確認する際に使う型
#[derive(sqlx::FromRow)]
pub struct RoomOccupancyRow {
    pub capacity: i32,
    pub occupancy: i64,
}

impl RoomOccupancyRow {
    pub fn is_full(&self) -> bool {
        self.occupancy >= i64::from(self.capacity)
    }
}
