//! Occupancy statistics service

use chrono::Local;

use crate::{
    api::stats::{ReservationStats, RoomStats, StatEntry, StatsResponse, TodayStats},
    error::AppResult,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Snapshot for the dashboard header: rooms and reservations by status,
    /// plus today's expected arrivals and departures.
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let today = Local::now().date_naive();

        let rooms_by_status = self.repository.rooms.count_by_status().await?;
        let reservations_by_status = self.repository.reservations.count_by_status().await?;
        let arrivals = self.repository.reservations.count_arrivals(today).await?;
        let departures = self.repository.reservations.count_departures(today).await?;

        let to_entries = |rows: Vec<(String, i64)>| {
            rows.into_iter()
                .map(|(label, value)| StatEntry { label, value })
                .collect::<Vec<_>>()
        };

        let room_entries = to_entries(rooms_by_status);
        let total_rooms = room_entries.iter().map(|e| e.value).sum();

        Ok(StatsResponse {
            rooms: RoomStats {
                total: total_rooms,
                by_status: room_entries,
            },
            reservations: ReservationStats {
                by_status: to_entries(reservations_by_status),
            },
            today: TodayStats {
                date: today,
                arrivals,
                departures,
            },
        })
    }
}
