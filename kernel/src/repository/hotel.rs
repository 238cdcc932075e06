use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{id::RoomId, room::Room};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    // 部屋を現在の予約件数つきで取得する
    async fn find_room_by_id(&self, room_id: RoomId) -> AppResult<Option<Room>>;
}
