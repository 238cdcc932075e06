use crate::model::id::{HotelId, RoomId};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Room {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub room_name: String,
    pub capacity: i32,
    // この部屋を参照している予約の件数。取得クエリ側で算出される
    // 読み取り専用の値で、サービスは部屋の状態を書き換えない
    pub occupancy: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    pub fn is_full(&self) -> bool {
        self.occupancy >= i64::from(self.capacity)
    }
}
