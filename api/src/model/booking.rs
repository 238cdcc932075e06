use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{Booking, BookingRoom},
    id::{BookingId, HotelId, RoomId},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    // 存在チェックはサービス側の部屋検索に任せる
    #[garde(skip)]
    pub room_id: i64,
}

impl CreateBookingRequest {
    pub fn room_id(&self) -> RoomId {
        RoomId::new(self.room_id)
    }
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: BookingId,
    #[serde(rename = "Room")]
    pub room: BookingRoomResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id, room, ..
        } = value;
        Self {
            id: booking_id,
            room: room.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRoomResponse {
    pub id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BookingRoom> for BookingRoomResponse {
    fn from(value: BookingRoom) -> Self {
        let BookingRoom {
            room_id,
            hotel_id,
            room_name,
            capacity,
            created_at,
            updated_at,
        } = value;
        Self {
            id: room_id,
            hotel_id,
            name: room_name,
            capacity,
            created_at,
            updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}

impl From<BookingId> for BookingIdResponse {
    fn from(value: BookingId) -> Self {
        Self { booking_id: value }
    }
}
