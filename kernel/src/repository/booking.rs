use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, UserId},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    // ユーザーの現在の予約を部屋情報ごと取得する（複数あれば先頭の 1 件）
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // 予約を作成する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 既存の予約の部屋を付け替える。予約 ID が存在しない場合は失敗する
    async fn update_room(&self, event: UpdateBookingRoom) -> AppResult<BookingId>;
}
