//! Front-desk daily operations endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{error::AppResult, models::reservation::ReservationDetails};

/// Date filter for arrivals/departures (defaults to today)
#[derive(Debug, Deserialize, IntoParams)]
pub struct DayQuery {
    pub date: Option<NaiveDate>,
}

/// Reservations arriving on a given day
#[utoipa::path(
    get,
    path = "/front-desk/arrivals",
    tag = "front-desk",
    params(
        ("date" = Option<String>, Query, description = "Day to list, ISO date, defaults to today")
    ),
    responses(
        (status = 200, description = "Expected arrivals", body = Vec<ReservationDetails>)
    )
)]
pub async fn arrivals(
    State(state): State<crate::AppState>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let arrivals = state.services.front_desk.arrivals(query.date).await?;
    Ok(Json(arrivals))
}

/// Reservations departing on a given day
#[utoipa::path(
    get,
    path = "/front-desk/departures",
    tag = "front-desk",
    params(
        ("date" = Option<String>, Query, description = "Day to list, ISO date, defaults to today")
    ),
    responses(
        (status = 200, description = "Expected departures", body = Vec<ReservationDetails>)
    )
)]
pub async fn departures(
    State(state): State<crate::AppState>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<Vec<ReservationDetails>>> {
    let departures = state.services.front_desk.departures(query.date).await?;
    Ok(Json(departures))
}

/// Check a guest in. The reservation moves to checked_in and the room to
/// occupied in a single transaction.
#[utoipa::path(
    post,
    path = "/reservations/{id}/check-in",
    tag = "front-desk",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Guest checked in", body = ReservationDetails),
        (status = 404, description = "Reservation not found"),
        (status = 409, description = "Reservation is not in booked status")
    )
)]
pub async fn check_in(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReservationDetails>> {
    let details = state.services.front_desk.check_in(id).await?;
    Ok(Json(details))
}

/// Check a guest out. The reservation moves to checked_out and the room to
/// cleaning in a single transaction.
#[utoipa::path(
    post,
    path = "/reservations/{id}/check-out",
    tag = "front-desk",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Guest checked out", body = ReservationDetails),
        (status = 404, description = "Reservation not found"),
        (status = 409, description = "Reservation is not in checked_in status")
    )
)]
pub async fn check_out(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ReservationDetails>> {
    let details = state.services.front_desk.check_out(id).await?;
    Ok(Json(details))
}
