use chrono::{DateTime, Utc};
use kernel::model::{
    booking::{Booking, BookingRoom},
    id::{BookingId, HotelId, RoomId, UserId},
};

// ユーザーの現在の予約を部屋情報ごと取得する際に使う型
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub booking_updated_at: DateTime<Utc>,
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub room_name: String,
    pub capacity: i32,
    pub room_created_at: DateTime<Utc>,
    pub room_updated_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            booking_updated_at,
            room_id,
            hotel_id,
            room_name,
            capacity,
            room_created_at,
            room_updated_at,
        } = value;
        Booking {
            booking_id,
            booked_by: user_id,
            updated_at: booking_updated_at,
            room: BookingRoom {
                room_id,
                hotel_id,
                room_name,
                capacity,
                created_at: room_created_at,
                updated_at: room_updated_at,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn booking_row_maps_into_booking_with_room() {
        let now = Utc::now();
        let row = BookingRow {
            booking_id: BookingId::new(5),
            user_id: UserId::new(1),
            booking_updated_at: now,
            room_id: RoomId::new(7),
            hotel_id: HotelId::new(2),
            room_name: "1020".into(),
            capacity: 3,
            room_created_at: now,
            room_updated_at: now,
        };

        let booking = Booking::from(row);
        assert_eq!(booking.booking_id, BookingId::new(5));
        assert_eq!(booking.booked_by, UserId::new(1));
        assert_eq!(booking.room.room_id, RoomId::new(7));
        assert_eq!(booking.room.capacity, 3);
    }
}
