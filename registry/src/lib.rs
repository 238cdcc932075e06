use std::sync::Arc;

use adapter::database::ConnectionPool;
use adapter::repository::{
    auth::AuthRepositoryImpl, booking::BookingRepositoryImpl,
    enrollment::EnrollmentRepositoryImpl, health::HealthCheckRepositoryImpl,
    hotel::HotelRepositoryImpl, ticket::TicketRepositoryImpl,
};
use kernel::repository::{
    auth::AuthRepository, booking::BookingRepository, enrollment::EnrollmentRepository,
    health::HealthCheckRepository, hotel::HotelRepository, ticket::TicketRepository,
};
use kernel::service::booking::BookingService;

#[derive(Clone)]
pub struct AppRegistry {
    booking_service: BookingService,
    auth_repository: Arc<dyn AuthRepository>,
    health_check_repository: Arc<dyn HealthCheckRepository>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool) -> Self {
        Self::with_repositories(
            Arc::new(BookingRepositoryImpl::new(pool.clone())),
            Arc::new(EnrollmentRepositoryImpl::new(pool.clone())),
            Arc::new(TicketRepositoryImpl::new(pool.clone())),
            Arc::new(HotelRepositoryImpl::new(pool.clone())),
            Arc::new(AuthRepositoryImpl::new(pool.clone())),
            Arc::new(HealthCheckRepositoryImpl::new(pool)),
        )
    }

    // テストでインメモリ実装やモックに差し替えられるよう、
    // 各リポジトリを外から渡せるコンストラクタも用意する
    pub fn with_repositories(
        booking_repository: Arc<dyn BookingRepository>,
        enrollment_repository: Arc<dyn EnrollmentRepository>,
        ticket_repository: Arc<dyn TicketRepository>,
        hotel_repository: Arc<dyn HotelRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        health_check_repository: Arc<dyn HealthCheckRepository>,
    ) -> Self {
        let booking_service = BookingService::new(
            booking_repository,
            enrollment_repository,
            ticket_repository,
            hotel_repository,
        );
        Self {
            booking_service,
            auth_repository,
            health_check_repository,
        }
    }

    pub fn booking_service(&self) -> BookingService {
        self.booking_service.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }
}
