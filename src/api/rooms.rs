//! Room registry endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::room::{CreateRoom, Room, UpdateRoom},
};

/// List active rooms ordered by room number
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    responses(
        (status = 200, description = "List of active rooms", body = Vec<Room>)
    )
)]
pub async fn list_rooms(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = state.services.rooms.list().await?;
    Ok(Json(rooms))
}

/// Get room details by ID
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "rooms",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room details", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Room>> {
    let room = state.services.rooms.get(id).await?;
    Ok(Json(room))
}

/// Create a new room
#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    request_body = CreateRoom,
    responses(
        (status = 201, description = "Room created", body = Room),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Room number already exists")
    )
)]
pub async fn create_room(
    State(state): State<crate::AppState>,
    Json(room): Json<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    let created = state.services.rooms.create(room).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a room (partial update; an empty body is a silent success)
#[utoipa::path(
    put,
    path = "/rooms/{id}",
    tag = "rooms",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    request_body = UpdateRoom,
    responses(
        (status = 200, description = "Room updated", body = Room),
        (status = 404, description = "Room not found")
    )
)]
pub async fn update_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(room): Json<UpdateRoom>,
) -> AppResult<Json<Room>> {
    let updated = state.services.rooms.update(id, room).await?;
    Ok(Json(updated))
}

/// Soft-archive a room
#[utoipa::path(
    post,
    path = "/rooms/{id}/archive",
    tag = "rooms",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room archived", body = Room),
        (status = 404, description = "Room not found"),
        (status = 422, description = "Room has active reservations")
    )
)]
pub async fn archive_room(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Room>> {
    let archived = state.services.rooms.archive(id).await?;
    Ok(Json(archived))
}

/// Mark a room clean (cleaning -> available)
#[utoipa::path(
    post,
    path = "/rooms/{id}/clean",
    tag = "rooms",
    params(
        ("id" = i32, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room marked clean", body = Room),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room is not in cleaning status")
    )
)]
pub async fn mark_room_clean(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Room>> {
    let room = state.services.rooms.mark_clean(id).await?;
    Ok(Json(room))
}
