use crate::model::id::{BookingId, HotelId, RoomId, UserId};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: UserId,
    pub updated_at: DateTime<Utc>,
    pub room: BookingRoom,
}

#[derive(Debug, Clone)]
pub struct BookingRoom {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub room_name: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
