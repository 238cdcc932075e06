use axum::{
    extract::{Path, State},
    Json,
};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::AppResult;

use crate::{
    extractor::AuthorizedUser,
    model::booking::{BookingIdResponse, BookingResponse, CreateBookingRequest},
};

pub async fn show_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_service()
        .find_booking_by_user_id(user.id())
        .await
        .map(BookingResponse::from)
        .map(Json)
}

pub async fn reserve_room(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .create_booking(user.id(), req.room_id())
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}

pub async fn change_room(
    user: AuthorizedUser,
    Path(booking_id): Path<BookingId>,
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    req.validate(&())?;

    registry
        .booking_service()
        .change_room(user.id(), req.room_id(), booking_id)
        .await
        .map(BookingIdResponse::from)
        .map(Json)
}
