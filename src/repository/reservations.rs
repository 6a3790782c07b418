//! Reservations repository for database operations
//!
//! Lifecycle transitions that touch both the reservation and its room
//! (check-in, check-out) run inside a single transaction so the two rows
//! can never diverge.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, BusinessRuleKind, Entity},
    models::{
        reservation::{CreateReservation, Reservation, ReservationDetails, ReservationStatus},
        room::{Room, RoomStatus},
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT r.id, r.room_id, rm.number AS room_number,
           r.guest_id, g.name AS guest_name,
           r.check_in_date, r.check_out_date, r.status,
           r.base_price, r.discount, r.final_price,
           r.notes, r.created_at
    FROM reservations r
    JOIN rooms rm ON r.room_id = rm.id
    JOIN guests g ON r.guest_id = g.id
"#;

#[derive(Clone)]
pub struct ReservationsRepository {
    pool: Pool<Postgres>,
}

impl ReservationsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get reservation by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Reservation> {
        sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Reservation, id })
    }

    /// Get reservation with room number and guest name
    pub async fn get_details_by_id(&self, id: i32) -> AppResult<ReservationDetails> {
        let query = format!("{} WHERE r.id = $1", DETAILS_SELECT);
        sqlx::query_as::<_, ReservationDetails>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Reservation, id })
    }

    /// List all reservations, historical included, newest stays first
    pub async fn list_all(&self) -> AppResult<Vec<ReservationDetails>> {
        let query = format!("{} ORDER BY r.check_in_date DESC, r.id DESC", DETAILS_SELECT);
        let reservations = sqlx::query_as::<_, ReservationDetails>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservations)
    }

    /// Reservations due to arrive on the given date (still booked)
    pub async fn arrivals(&self, date: NaiveDate) -> AppResult<Vec<ReservationDetails>> {
        let query = format!(
            "{} WHERE r.check_in_date = $1 AND r.status = 'booked' ORDER BY rm.number",
            DETAILS_SELECT
        );
        let reservations = sqlx::query_as::<_, ReservationDetails>(&query)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservations)
    }

    /// Reservations due to depart on the given date (currently checked in)
    pub async fn departures(&self, date: NaiveDate) -> AppResult<Vec<ReservationDetails>> {
        let query = format!(
            "{} WHERE r.check_out_date = $1 AND r.status = 'checked_in' ORDER BY rm.number",
            DETAILS_SELECT
        );
        let reservations = sqlx::query_as::<_, ReservationDetails>(&query)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;

        Ok(reservations)
    }

    /// Create a reservation.
    ///
    /// The room row is locked while the overlap check runs, so two
    /// concurrent bookings for the same room serialize here. The room's
    /// current base price is copied into the reservation and the status is
    /// always booked.
    pub async fn create(&self, req: &CreateReservation) -> AppResult<Reservation> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let room = sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1 FOR UPDATE")
            .bind(req.room_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(AppError::NotFound {
                entity: Entity::Room,
                id: req.room_id,
            })?;

        if !room.is_active {
            return Err(AppError::Validation(format!(
                "Room {} is archived and cannot be booked",
                room.number
            )));
        }

        let guest_active: Option<bool> =
            sqlx::query_scalar("SELECT is_active FROM guests WHERE id = $1")
                .bind(req.guest_id)
                .fetch_optional(&mut *tx)
                .await?;

        match guest_active {
            None => {
                return Err(AppError::NotFound {
                    entity: Entity::Guest,
                    id: req.guest_id,
                })
            }
            Some(false) => {
                return Err(AppError::Validation(format!(
                    "Guest {} is archived and cannot book",
                    req.guest_id
                )))
            }
            Some(true) => {}
        }

        // Half-open date ranges: a stay ending on a given day does not
        // conflict with one starting that day.
        let overlapping: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE room_id = $1
                  AND status IN ('booked', 'checked_in')
                  AND check_in_date < $3
                  AND check_out_date > $2
            )
            "#,
        )
        .bind(req.room_id)
        .bind(req.check_in_date)
        .bind(req.check_out_date)
        .fetch_one(&mut *tx)
        .await?;

        if overlapping {
            return Err(AppError::BusinessRule(BusinessRuleKind::RoomUnavailable(
                format!("{} to {}", req.check_in_date, req.check_out_date),
            )));
        }

        let discount = req.discount.unwrap_or(Decimal::ZERO);
        if discount > room.base_price {
            return Err(AppError::Validation(format!(
                "discount ({}) exceeds the room's base price ({})",
                discount, room.base_price
            )));
        }
        let final_price = room.base_price - discount;

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO reservations (
                room_id, guest_id, check_in_date, check_out_date,
                status, base_price, discount, final_price, notes, created_at
            )
            VALUES ($1, $2, $3, $4, 'booked', $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(req.room_id)
        .bind(req.guest_id)
        .bind(req.check_in_date)
        .bind(req.check_out_date)
        .bind(room.base_price)
        .bind(discount)
        .bind(final_price)
        .bind(&req.notes)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Apply a lifecycle transition, optionally moving the room to a new
    /// status in the same transaction. The current status is re-checked
    /// under a row lock before any write.
    async fn transition(
        &self,
        id: i32,
        to: ReservationStatus,
        room_status: Option<RoomStatus>,
    ) -> AppResult<Reservation> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let reservation =
            sqlx::query_as::<_, Reservation>("SELECT * FROM reservations WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(AppError::NotFound {
                    entity: Entity::Reservation,
                    id,
                })?;

        if !reservation.status.can_transition_to(to) {
            return Err(AppError::StateConflict(format!(
                "Cannot move reservation {} to {}: current status is {}",
                id, to, reservation.status
            )));
        }

        sqlx::query("UPDATE reservations SET status = $1 WHERE id = $2")
            .bind(to)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if let Some(status) = room_status {
            sqlx::query("UPDATE rooms SET status = $1, updated_at = $2 WHERE id = $3")
                .bind(status)
                .bind(now)
                .bind(reservation.room_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.get_by_id(id).await
    }

    /// Check in: reservation booked -> checked_in, room -> occupied
    pub async fn check_in(&self, id: i32) -> AppResult<Reservation> {
        self.transition(id, ReservationStatus::CheckedIn, Some(RoomStatus::Occupied))
            .await
    }

    /// Check out: reservation checked_in -> checked_out, room -> cleaning
    pub async fn check_out(&self, id: i32) -> AppResult<Reservation> {
        self.transition(id, ReservationStatus::CheckedOut, Some(RoomStatus::Cleaning))
            .await
    }

    /// Cancel: only from booked, never touches the room
    pub async fn cancel(&self, id: i32) -> AppResult<Reservation> {
        self.transition(id, ReservationStatus::Cancelled, None).await
    }

    /// Mark no-show: only from booked, never touches the room
    pub async fn mark_no_show(&self, id: i32) -> AppResult<Reservation> {
        self.transition(id, ReservationStatus::NoShow, None).await
    }

    /// True when the guest holds a reservation in booked or checked_in
    /// status whose check-out date is today or later
    pub async fn guest_has_active(&self, guest_id: i32, today: NaiveDate) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE guest_id = $1
                  AND status IN ('booked', 'checked_in')
                  AND check_out_date >= $2
            )
            "#,
        )
        .bind(guest_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Same guard for rooms
    pub async fn room_has_active(&self, room_id: i32, today: NaiveDate) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM reservations
                WHERE room_id = $1
                  AND status IN ('booked', 'checked_in')
                  AND check_out_date >= $2
            )
            "#,
        )
        .bind(room_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    /// Count reservations grouped by status
    pub async fn count_by_status(&self) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM reservations GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Count arrivals still expected on the given date
    pub async fn count_arrivals(&self, date: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations WHERE check_in_date = $1 AND status = 'booked'",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Count departures still expected on the given date
    pub async fn count_departures(&self, date: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations WHERE check_out_date = $1 AND status = 'checked_in'",
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
