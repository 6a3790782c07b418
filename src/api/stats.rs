//! Occupancy statistics endpoints

use axum::{extract::State, Json};
use chrono::NaiveDate;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

/// Statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    /// Room statistics
    pub rooms: RoomStats,
    /// Reservation statistics
    pub reservations: ReservationStats,
    /// Today's expected movements
    pub today: TodayStats,
}

#[derive(Serialize, ToSchema)]
pub struct RoomStats {
    /// Total number of active rooms
    pub total: i64,
    /// Active rooms by status
    pub by_status: Vec<StatEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct ReservationStats {
    /// Reservations by status, historical included
    pub by_status: Vec<StatEntry>,
}

#[derive(Serialize, ToSchema)]
pub struct TodayStats {
    /// Server-local calendar date the counts refer to
    pub date: NaiveDate,
    /// Booked reservations arriving today
    pub arrivals: i64,
    /// Checked-in reservations departing today
    pub departures: i64,
}

#[derive(Serialize, ToSchema)]
pub struct StatEntry {
    /// Label
    pub label: String,
    /// Value
    pub value: i64,
}

/// Occupancy snapshot for the dashboard header
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Occupancy statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(State(state): State<crate::AppState>) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
