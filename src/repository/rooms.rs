//! Rooms repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult, Entity},
    models::room::{CreateRoom, Room, RoomStatus, UpdateRoom},
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get room by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Room> {
        sqlx::query_as::<_, Room>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound { entity: Entity::Room, id })
    }

    /// List active rooms ordered by room number
    pub async fn list_active(&self) -> AppResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            "SELECT * FROM rooms WHERE is_active ORDER BY number",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    /// Create a new room
    pub async fn create(&self, room: &CreateRoom) -> AppResult<Room> {
        let now = Utc::now();
        let status = room.status.unwrap_or(RoomStatus::Available);

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO rooms (number, room_type, base_price, status, notes, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, true, $6, $6)
            RETURNING id
            "#,
        )
        .bind(&room.number)
        .bind(room.room_type)
        .bind(room.base_price)
        .bind(status)
        .bind(&room.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Room number {} already exists", room.number))
            }
            _ => AppError::Database(e),
        })?;

        self.get_by_id(id).await
    }

    /// Update an existing room (partial; an empty update performs no write)
    pub async fn update(&self, id: i32, room: &UpdateRoom) -> AppResult<Room> {
        if room.is_empty() {
            return self.get_by_id(id).await;
        }

        let now = Utc::now();

        // Build dynamic update query
        let mut sets = vec!["updated_at = $1".to_string()];
        let mut param_idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, param_idx));
                    param_idx += 1;
                }
            };
        }

        add_field!(room.number, "number");
        add_field!(room.room_type, "room_type");
        add_field!(room.base_price, "base_price");
        add_field!(room.status, "status");
        add_field!(room.notes, "notes");

        let query = format!("UPDATE rooms SET {} WHERE id = {}", sets.join(", "), id);

        let mut builder = sqlx::query(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(room.number);
        bind_field!(room.room_type);
        bind_field!(room.base_price);
        bind_field!(room.status);
        bind_field!(room.notes);

        builder.execute(&self.pool).await.map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::Conflict("Room number already exists".to_string())
            }
            _ => AppError::Database(e),
        })?;

        self.get_by_id(id).await
    }

    /// Soft-archive a room (history is preserved, row is never deleted)
    pub async fn archive(&self, id: i32) -> AppResult<Room> {
        let now = Utc::now();

        sqlx::query("UPDATE rooms SET is_active = false, archived_at = $1, updated_at = $1 WHERE id = $2")
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_by_id(id).await
    }

    /// Set the housekeeping status of a room
    pub async fn set_status(&self, id: i32, status: RoomStatus) -> AppResult<Room> {
        let now = Utc::now();

        sqlx::query("UPDATE rooms SET status = $1, updated_at = $2 WHERE id = $3")
            .bind(status)
            .bind(now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        self.get_by_id(id).await
    }

    /// Count active rooms grouped by status
    pub async fn count_by_status(&self) -> AppResult<Vec<(String, i64)>> {
        let rows = sqlx::query_as::<_, (String, i64)>(
            "SELECT status, COUNT(*) FROM rooms WHERE is_active GROUP BY status ORDER BY status",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
