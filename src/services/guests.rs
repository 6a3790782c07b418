//! Guest registry service

use chrono::Local;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, BusinessRuleKind},
    models::guest::{CreateGuest, Guest, GuestQuery, UpdateGuest},
    repository::Repository,
};

#[derive(Clone)]
pub struct GuestsService {
    repository: Repository,
}

impl GuestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List active guests, optionally filtered by name/document search
    pub async fn search(&self, query: &GuestQuery) -> AppResult<Vec<Guest>> {
        self.repository.guests.search(query).await
    }

    /// Get guest by ID
    pub async fn get(&self, id: i32) -> AppResult<Guest> {
        self.repository.guests.get_by_id(id).await
    }

    /// Create a new guest
    pub async fn create(&self, guest: CreateGuest) -> AppResult<Guest> {
        guest
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.repository.guests.create(&guest).await?;
        tracing::info!(guest_id = created.id, "Guest created");
        Ok(created)
    }

    /// Update a guest (partial; an empty update is a silent success)
    pub async fn update(&self, id: i32, guest: UpdateGuest) -> AppResult<Guest> {
        guest
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        self.repository.guests.update(id, &guest).await
    }

    /// Soft-archive a guest.
    ///
    /// Refused while the guest holds a reservation in booked or checked_in
    /// status with a check-out date of today or later.
    pub async fn archive(&self, id: i32) -> AppResult<Guest> {
        let guest = self.repository.guests.get_by_id(id).await?;
        let today = Local::now().date_naive();

        if self.repository.reservations.guest_has_active(id, today).await? {
            return Err(AppError::BusinessRule(
                BusinessRuleKind::HasActiveReservations { entity: "Guest" },
            ));
        }

        let archived = self.repository.guests.archive(guest.id).await?;
        tracing::info!(guest_id = id, "Guest archived");
        Ok(archived)
    }
}
