//! Reservation ledger service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::reservation::{CreateReservation, Reservation, ReservationDetails},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReservationsService {
    repository: Repository,
}

impl ReservationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all reservations, historical included, enriched for display
    pub async fn list(&self) -> AppResult<Vec<ReservationDetails>> {
        self.repository.reservations.list_all().await
    }

    /// Get reservation details by ID
    pub async fn get(&self, id: i32) -> AppResult<ReservationDetails> {
        self.repository.reservations.get_details_by_id(id).await
    }

    /// Create a reservation in booked status, copying the room's current
    /// base price. Rejects inverted date ranges and overlapping stays
    /// before anything is written.
    pub async fn create(&self, req: CreateReservation) -> AppResult<Reservation> {
        req.validate_dates().map_err(AppError::Validation)?;

        if let Some(discount) = req.discount {
            if discount < Decimal::ZERO {
                return Err(AppError::Validation(
                    "discount must not be negative".to_string(),
                ));
            }
        }

        let created = self.repository.reservations.create(&req).await?;

        tracing::info!(
            reservation_id = created.id,
            room_id = created.room_id,
            guest_id = created.guest_id,
            "Reservation created"
        );
        Ok(created)
    }

    /// Cancel a reservation (only from booked)
    pub async fn cancel(&self, id: i32) -> AppResult<Reservation> {
        let cancelled = self.repository.reservations.cancel(id).await?;
        tracing::info!(reservation_id = id, "Reservation cancelled");
        Ok(cancelled)
    }

    /// Mark a reservation as no-show (only from booked)
    pub async fn mark_no_show(&self, id: i32) -> AppResult<Reservation> {
        let marked = self.repository.reservations.mark_no_show(id).await?;
        tracing::info!(reservation_id = id, "Reservation marked no-show");
        Ok(marked)
    }
}
