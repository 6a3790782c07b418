//! Daily front-desk operations: arrivals, departures, check-in, check-out

use chrono::{Local, NaiveDate};

use crate::{
    error::AppResult,
    models::reservation::ReservationDetails,
    repository::Repository,
};

#[derive(Clone)]
pub struct FrontDeskService {
    repository: Repository,
}

impl FrontDeskService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Reservations arriving on the given date (defaults to today,
    /// server-local time)
    pub async fn arrivals(&self, date: Option<NaiveDate>) -> AppResult<Vec<ReservationDetails>> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        self.repository.reservations.arrivals(date).await
    }

    /// Reservations departing on the given date
    pub async fn departures(&self, date: Option<NaiveDate>) -> AppResult<Vec<ReservationDetails>> {
        let date = date.unwrap_or_else(|| Local::now().date_naive());
        self.repository.reservations.departures(date).await
    }

    /// Check a guest in: reservation booked -> checked_in and room ->
    /// occupied, committed together.
    pub async fn check_in(&self, reservation_id: i32) -> AppResult<ReservationDetails> {
        self.repository.reservations.check_in(reservation_id).await?;
        tracing::info!(reservation_id, "Guest checked in");
        self.repository.reservations.get_details_by_id(reservation_id).await
    }

    /// Check a guest out: reservation checked_in -> checked_out and room ->
    /// cleaning, committed together.
    pub async fn check_out(&self, reservation_id: i32) -> AppResult<ReservationDetails> {
        self.repository.reservations.check_out(reservation_id).await?;
        tracing::info!(reservation_id, "Guest checked out");
        self.repository.reservations.get_details_by_id(reservation_id).await
    }
}
