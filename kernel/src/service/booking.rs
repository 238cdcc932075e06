use std::sync::Arc;

use derive_new::new;
use shared::error::{AppError, AppResult};

use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBookingRoom},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use crate::repository::{
    booking::BookingRepository, enrollment::EnrollmentRepository, hotel::HotelRepository,
    ticket::TicketRepository,
};

/// 予約のビジネスルールを担うサービス。
/// ストレージへ書き込む前に、誰がどの部屋を予約できるかの判定を行う
#[derive(new, Clone)]
pub struct BookingService {
    booking_repository: Arc<dyn BookingRepository>,
    enrollment_repository: Arc<dyn EnrollmentRepository>,
    ticket_repository: Arc<dyn TicketRepository>,
    hotel_repository: Arc<dyn HotelRepository>,
}

impl BookingService {
    /// ユーザーの現在の予約を部屋情報ごと返す
    pub async fn find_booking_by_user_id(&self, user_id: UserId) -> AppResult<Booking> {
        self.booking_repository
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("no booking exists for user ({user_id})"))
            })
    }

    /// 予約を作成する。チェックは順序依存で、先に失敗した条件のエラーが返る
    pub async fn create_booking(&self, user_id: UserId, room_id: RoomId) -> AppResult<BookingId> {
        let enrollment = self
            .enrollment_repository
            .find_with_address_by_user_id(user_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("enrollment for user ({user_id}) was not found"))
            })?;

        // チケット不適格は容量不足と同じ NoVacancy として返す。
        // エンドポイントのコントラクト上、どちらも 403 になる
        let ticket = self
            .ticket_repository
            .find_by_enrollment_id(enrollment.enrollment_id)
            .await?;
        match ticket {
            Some(ticket) if ticket.entitles_hotel_stay() => {}
            _ => {
                return Err(AppError::NoVacancy(
                    "ticket does not entitle a hotel stay".into(),
                ))
            }
        }

        let room = self
            .hotel_repository
            .find_room_by_id(room_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("room ({room_id}) was not found"))
            })?;

        if room.is_full() {
            return Err(AppError::NoVacancy(format!(
                "room ({room_id}) is already at capacity"
            )));
        }

        self.booking_repository
            .create(CreateBooking::new(user_id, room_id))
            .await
    }

    /// 既存の予約を別の部屋へ付け替える
    pub async fn change_room(
        &self,
        user_id: UserId,
        room_id: RoomId,
        booking_id: BookingId,
    ) -> AppResult<BookingId> {
        // 予約を持たないユーザーは NoVacancy として弾く（EntityNotFound ではない）。
        // エンドポイントはここで 403 を返すコントラクトになっている
        if self
            .booking_repository
            .find_by_user_id(user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NoVacancy(format!(
                "user ({user_id}) has no booking to change"
            )));
        }

        let room = self
            .hotel_repository
            .find_room_by_id(room_id)
            .await?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!("room ({room_id}) was not found"))
            })?;

        if room.is_full() {
            return Err(AppError::NoVacancy(format!(
                "room ({room_id}) is already at capacity"
            )));
        }

        // 更新対象はパスで渡された booking_id をそのまま信用する
        self.booking_repository
            .update_room(UpdateBookingRoom::new(booking_id, room_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        booking::BookingRoom,
        enrollment::{Address, Enrollment},
        id::{EnrollmentId, HotelId, TicketId, TicketTypeId},
        room::Room,
        ticket::{Ticket, TicketStatus, TicketType},
    };
    use crate::repository::{
        booking::MockBookingRepository, enrollment::MockEnrollmentRepository,
        hotel::MockHotelRepository, ticket::MockTicketRepository,
    };
    use chrono::Utc;
    use mockall::predicate::eq;

    fn service(
        booking: MockBookingRepository,
        enrollment: MockEnrollmentRepository,
        ticket: MockTicketRepository,
        hotel: MockHotelRepository,
    ) -> BookingService {
        BookingService::new(
            Arc::new(booking),
            Arc::new(enrollment),
            Arc::new(ticket),
            Arc::new(hotel),
        )
    }

    fn enrollment_fixture(user_id: UserId) -> Enrollment {
        Enrollment {
            enrollment_id: EnrollmentId::new(10),
            user_id,
            name: "Ada Lovelace".into(),
            address: Some(Address {
                street: "Rua das Flores".into(),
                number: "100".into(),
                city: "Campinas".into(),
                state: "SP".into(),
                postal_code: "13000-000".into(),
            }),
        }
    }

    fn ticket_fixture(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            ticket_id: TicketId::new(20),
            enrollment_id: EnrollmentId::new(10),
            status,
            ticket_type: TicketType {
                ticket_type_id: TicketTypeId::new(30),
                is_remote,
                includes_hotel,
            },
        }
    }

    fn room_fixture(room_id: RoomId, capacity: i32, occupancy: i64) -> Room {
        Room {
            room_id,
            hotel_id: HotelId::new(1),
            room_name: "1020".into(),
            capacity,
            occupancy,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn booking_fixture(booking_id: BookingId, user_id: UserId, room_id: RoomId) -> Booking {
        Booking {
            booking_id,
            booked_by: user_id,
            updated_at: Utc::now(),
            room: BookingRoom {
                room_id,
                hotel_id: HotelId::new(1),
                room_name: "1020".into(),
                capacity: 3,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        }
    }

    #[tokio::test]
    async fn find_booking_fails_when_user_has_none() {
        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_user_id()
            .with(eq(UserId::new(1)))
            .returning(|_| Ok(None));

        let svc = service(
            booking_repo,
            MockEnrollmentRepository::new(),
            MockTicketRepository::new(),
            MockHotelRepository::new(),
        );

        let res = svc.find_booking_by_user_id(UserId::new(1)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn find_booking_returns_booking_with_room() {
        let expected = booking_fixture(BookingId::new(5), UserId::new(1), RoomId::new(7));
        let mut booking_repo = MockBookingRepository::new();
        let returned = expected.clone();
        booking_repo
            .expect_find_by_user_id()
            .with(eq(UserId::new(1)))
            .returning(move |_| Ok(Some(returned.clone())));

        let svc = service(
            booking_repo,
            MockEnrollmentRepository::new(),
            MockTicketRepository::new(),
            MockHotelRepository::new(),
        );

        let booking = svc.find_booking_by_user_id(UserId::new(1)).await.unwrap();
        assert_eq!(booking.booking_id, expected.booking_id);
        assert_eq!(booking.room.room_id, expected.room.room_id);
        assert_eq!(booking.room.capacity, expected.room.capacity);
    }

    #[tokio::test]
    async fn create_booking_fails_without_enrollment() {
        let mut enrollment_repo = MockEnrollmentRepository::new();
        enrollment_repo
            .expect_find_with_address_by_user_id()
            .returning(|_| Ok(None));

        let svc = service(
            MockBookingRepository::new(),
            enrollment_repo,
            MockTicketRepository::new(),
            MockHotelRepository::new(),
        );

        let res = svc.create_booking(UserId::new(1), RoomId::new(7)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn create_booking_rejects_ineligible_tickets() {
        // チケットなし・リモート・宿泊なし・未入金はすべて NoVacancy
        let cases: Vec<Option<Ticket>> = vec![
            None,
            Some(ticket_fixture(TicketStatus::Paid, true, true)),
            Some(ticket_fixture(TicketStatus::Paid, false, false)),
            Some(ticket_fixture(TicketStatus::Reserved, false, true)),
        ];

        for ticket in cases {
            let mut enrollment_repo = MockEnrollmentRepository::new();
            enrollment_repo
                .expect_find_with_address_by_user_id()
                .returning(|user_id| Ok(Some(enrollment_fixture(user_id))));

            let mut ticket_repo = MockTicketRepository::new();
            let returned = ticket.clone();
            ticket_repo
                .expect_find_by_enrollment_id()
                .with(eq(EnrollmentId::new(10)))
                .returning(move |_| Ok(returned.clone()));

            let svc = service(
                MockBookingRepository::new(),
                enrollment_repo,
                ticket_repo,
                MockHotelRepository::new(),
            );

            let res = svc.create_booking(UserId::new(1), RoomId::new(7)).await;
            assert!(matches!(res, Err(AppError::NoVacancy(_))));
        }
    }

    #[tokio::test]
    async fn create_booking_fails_when_room_does_not_exist() {
        let mut enrollment_repo = MockEnrollmentRepository::new();
        enrollment_repo
            .expect_find_with_address_by_user_id()
            .returning(|user_id| Ok(Some(enrollment_fixture(user_id))));

        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo
            .expect_find_by_enrollment_id()
            .returning(|_| Ok(Some(ticket_fixture(TicketStatus::Paid, false, true))));

        let mut hotel_repo = MockHotelRepository::new();
        hotel_repo
            .expect_find_room_by_id()
            .with(eq(RoomId::new(7)))
            .returning(|_| Ok(None));

        let svc = service(
            MockBookingRepository::new(),
            enrollment_repo,
            ticket_repo,
            hotel_repo,
        );

        let res = svc.create_booking(UserId::new(1), RoomId::new(7)).await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn create_booking_rejects_full_room() {
        // 満室（占有数 == 定員）は定員 0 の部屋を含めて NoVacancy
        for (capacity, occupancy) in [(3, 3), (0, 0)] {
            let mut enrollment_repo = MockEnrollmentRepository::new();
            enrollment_repo
                .expect_find_with_address_by_user_id()
                .returning(|user_id| Ok(Some(enrollment_fixture(user_id))));

            let mut ticket_repo = MockTicketRepository::new();
            ticket_repo
                .expect_find_by_enrollment_id()
                .returning(|_| Ok(Some(ticket_fixture(TicketStatus::Paid, false, true))));

            let mut hotel_repo = MockHotelRepository::new();
            hotel_repo
                .expect_find_room_by_id()
                .returning(move |room_id| Ok(Some(room_fixture(room_id, capacity, occupancy))));

            let svc = service(
                MockBookingRepository::new(),
                enrollment_repo,
                ticket_repo,
                hotel_repo,
            );

            let res = svc.create_booking(UserId::new(1), RoomId::new(7)).await;
            assert!(matches!(res, Err(AppError::NoVacancy(_))));
        }
    }

    #[tokio::test]
    async fn create_booking_succeeds_with_valid_ticket_and_vacancy() {
        let mut enrollment_repo = MockEnrollmentRepository::new();
        enrollment_repo
            .expect_find_with_address_by_user_id()
            .with(eq(UserId::new(1)))
            .returning(|user_id| Ok(Some(enrollment_fixture(user_id))));

        let mut ticket_repo = MockTicketRepository::new();
        ticket_repo
            .expect_find_by_enrollment_id()
            .returning(|_| Ok(Some(ticket_fixture(TicketStatus::Paid, false, true))));

        let mut hotel_repo = MockHotelRepository::new();
        hotel_repo
            .expect_find_room_by_id()
            .returning(|room_id| Ok(Some(room_fixture(room_id, 3, 0))));

        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_create()
            .withf(|event| {
                event.user_id == UserId::new(1) && event.room_id == RoomId::new(7)
            })
            .returning(|_| Ok(BookingId::new(55)));

        let svc = service(booking_repo, enrollment_repo, ticket_repo, hotel_repo);

        let booking_id = svc
            .create_booking(UserId::new(1), RoomId::new(7))
            .await
            .unwrap();
        assert_eq!(booking_id, BookingId::new(55));
    }

    #[tokio::test]
    async fn change_room_without_booking_is_no_vacancy() {
        // 予約を持たないユーザーは EntityNotFound ではなく NoVacancy になる
        let mut booking_repo = MockBookingRepository::new();
        booking_repo
            .expect_find_by_user_id()
            .returning(|_| Ok(None));

        let svc = service(
            booking_repo,
            MockEnrollmentRepository::new(),
            MockTicketRepository::new(),
            MockHotelRepository::new(),
        );

        let res = svc
            .change_room(UserId::new(1), RoomId::new(7), BookingId::new(5))
            .await;
        assert!(matches!(res, Err(AppError::NoVacancy(_))));
    }

    #[tokio::test]
    async fn change_room_fails_when_target_room_does_not_exist() {
        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_user_id().returning(|user_id| {
            Ok(Some(booking_fixture(
                BookingId::new(5),
                user_id,
                RoomId::new(7),
            )))
        });

        let mut hotel_repo = MockHotelRepository::new();
        hotel_repo
            .expect_find_room_by_id()
            .with(eq(RoomId::new(8)))
            .returning(|_| Ok(None));

        let svc = service(
            booking_repo,
            MockEnrollmentRepository::new(),
            MockTicketRepository::new(),
            hotel_repo,
        );

        let res = svc
            .change_room(UserId::new(1), RoomId::new(8), BookingId::new(5))
            .await;
        assert!(matches!(res, Err(AppError::EntityNotFound(_))));
    }

    #[tokio::test]
    async fn change_room_rejects_full_target_room() {
        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_user_id().returning(|user_id| {
            Ok(Some(booking_fixture(
                BookingId::new(5),
                user_id,
                RoomId::new(7),
            )))
        });

        let mut hotel_repo = MockHotelRepository::new();
        hotel_repo
            .expect_find_room_by_id()
            .returning(|room_id| Ok(Some(room_fixture(room_id, 2, 2))));

        let svc = service(
            booking_repo,
            MockEnrollmentRepository::new(),
            MockTicketRepository::new(),
            hotel_repo,
        );

        let res = svc
            .change_room(UserId::new(1), RoomId::new(8), BookingId::new(5))
            .await;
        assert!(matches!(res, Err(AppError::NoVacancy(_))));
    }

    #[tokio::test]
    async fn change_room_updates_booking_identified_by_path() {
        let mut booking_repo = MockBookingRepository::new();
        booking_repo.expect_find_by_user_id().returning(|user_id| {
            Ok(Some(booking_fixture(
                BookingId::new(5),
                user_id,
                RoomId::new(7),
            )))
        });
        // 更新対象は手順 1 で見つかった予約ではなく、呼び出し元が渡した booking_id
        booking_repo
            .expect_update_room()
            .withf(|event| {
                event.booking_id == BookingId::new(99) && event.room_id == RoomId::new(8)
            })
            .returning(|event| Ok(event.booking_id));

        let mut hotel_repo = MockHotelRepository::new();
        hotel_repo
            .expect_find_room_by_id()
            .returning(|room_id| Ok(Some(room_fixture(room_id, 3, 1))));

        let svc = service(
            booking_repo,
            MockEnrollmentRepository::new(),
            MockTicketRepository::new(),
            hotel_repo,
        );

        let booking_id = svc
            .change_room(UserId::new(1), RoomId::new(8), BookingId::new(99))
            .await
            .unwrap();
        assert_eq!(booking_id, BookingId::new(99));
    }
}
