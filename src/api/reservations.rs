//! Reservation ledger endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::reservation::{CreateReservation, Reservation, ReservationDetails},
};

/// List all reservations, newest stays first
#[utoipa::path(
    get,
    path = "/reservations",
    tag = "reservations",
    responses(
        (status = 200, description = "All reservations with room and guest details", body = Vec<ReservationDetails>)
    )
)]
pub async fn list_reservations(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let reservations = state.services.reservations.list().await?;
    Ok(Json(reservations))
}

/// Get reservation details by ID
#[utoipa::path(
    get,
    path = "/reservations/{id}",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation details", body = ReservationDetails),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReservationDetails>> {
    let reservation = state.services.reservations.get(id).await?;
    Ok(Json(reservation))
}

/// Create a reservation (always starts as booked)
#[utoipa::path(
    post,
    path = "/reservations",
    tag = "reservations",
    request_body = CreateReservation,
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Invalid dates or discount"),
        (status = 404, description = "Room or guest not found"),
        (status = 422, description = "Room unavailable for the requested dates")
    )
)]
pub async fn create_reservation(
    State(state): State<crate::AppState>,
    Json(req): Json<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    let created = state.services.reservations.create(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Cancel a reservation (only allowed from booked)
#[utoipa::path(
    post,
    path = "/reservations/{id}/cancel",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = Reservation),
        (status = 404, description = "Reservation not found"),
        (status = 409, description = "Reservation is not in booked status")
    )
)]
pub async fn cancel_reservation(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Reservation>> {
    let cancelled = state.services.reservations.cancel(id).await?;
    Ok(Json(cancelled))
}

/// Mark a reservation as no-show (only allowed from booked)
#[utoipa::path(
    post,
    path = "/reservations/{id}/no-show",
    tag = "reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation marked as no-show", body = Reservation),
        (status = 404, description = "Reservation not found"),
        (status = 409, description = "Reservation is not in booked status")
    )
)]
pub async fn mark_no_show(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Reservation>> {
    let marked = state.services.reservations.mark_no_show(id).await?;
    Ok(Json(marked))
}
