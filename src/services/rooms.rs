//! Room registry service

use chrono::Local;
use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    error::{AppError, AppResult, BusinessRuleKind},
    models::room::{CreateRoom, Room, RoomStatus, UpdateRoom},
    repository::Repository,
};

#[derive(Clone)]
pub struct RoomsService {
    repository: Repository,
}

impl RoomsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List active rooms ordered by room number
    pub async fn list(&self) -> AppResult<Vec<Room>> {
        self.repository.rooms.list_active().await
    }

    /// Get room by ID
    pub async fn get(&self, id: i32) -> AppResult<Room> {
        self.repository.rooms.get_by_id(id).await
    }

    /// Create a new room
    pub async fn create(&self, room: CreateRoom) -> AppResult<Room> {
        room.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if room.base_price < Decimal::ZERO {
            return Err(AppError::Validation(
                "base_price must not be negative".to_string(),
            ));
        }

        let created = self.repository.rooms.create(&room).await?;
        tracing::info!(room_id = created.id, number = %created.number, "Room created");
        Ok(created)
    }

    /// Update a room (partial; an empty update is a silent success)
    pub async fn update(&self, id: i32, room: UpdateRoom) -> AppResult<Room> {
        room.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if let Some(price) = room.base_price {
            if price < Decimal::ZERO {
                return Err(AppError::Validation(
                    "base_price must not be negative".to_string(),
                ));
            }
        }

        self.repository.rooms.update(id, &room).await
    }

    /// Soft-archive a room.
    ///
    /// Refused while the room holds a reservation in booked or checked_in
    /// status with a check-out date of today or later, mirroring the guard
    /// on guest archival.
    pub async fn archive(&self, id: i32) -> AppResult<Room> {
        let room = self.repository.rooms.get_by_id(id).await?;
        let today = Local::now().date_naive();

        if self.repository.reservations.room_has_active(id, today).await? {
            return Err(AppError::BusinessRule(
                BusinessRuleKind::HasActiveReservations { entity: "Room" },
            ));
        }

        let archived = self.repository.rooms.archive(room.id).await?;
        tracing::info!(room_id = id, number = %archived.number, "Room archived");
        Ok(archived)
    }

    /// Mark a room clean: cleaning -> available. Any other current status
    /// is rejected with a state conflict naming that status.
    pub async fn mark_clean(&self, id: i32) -> AppResult<Room> {
        let room = self.repository.rooms.get_by_id(id).await?;

        if room.status != RoomStatus::Cleaning {
            return Err(AppError::StateConflict(format!(
                "Cannot mark room {} clean: current status is {}",
                room.number, room.status
            )));
        }

        self.repository.rooms.set_status(id, RoomStatus::Available).await
    }
}
