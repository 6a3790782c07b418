//! Guest registry endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::guest::{CreateGuest, Guest, GuestQuery, UpdateGuest},
};

/// List active guests with optional search
#[utoipa::path(
    get,
    path = "/guests",
    tag = "guests",
    params(
        ("search" = Option<String>, Query, description = "Substring match against name or document")
    ),
    responses(
        (status = 200, description = "List of active guests", body = Vec<Guest>)
    )
)]
pub async fn list_guests(
    State(state): State<crate::AppState>,
    Query(query): Query<GuestQuery>,
) -> AppResult<Json<Vec<Guest>>> {
    let guests = state.services.guests.search(&query).await?;
    Ok(Json(guests))
}

/// Get guest details by ID
#[utoipa::path(
    get,
    path = "/guests/{id}",
    tag = "guests",
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest details", body = Guest),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn get_guest(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Guest>> {
    let guest = state.services.guests.get(id).await?;
    Ok(Json(guest))
}

/// Create a new guest
#[utoipa::path(
    post,
    path = "/guests",
    tag = "guests",
    request_body = CreateGuest,
    responses(
        (status = 201, description = "Guest created", body = Guest),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_guest(
    State(state): State<crate::AppState>,
    Json(guest): Json<CreateGuest>,
) -> AppResult<(StatusCode, Json<Guest>)> {
    let created = state.services.guests.create(guest).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a guest (partial update; an empty body is a silent success)
#[utoipa::path(
    put,
    path = "/guests/{id}",
    tag = "guests",
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    request_body = UpdateGuest,
    responses(
        (status = 200, description = "Guest updated", body = Guest),
        (status = 404, description = "Guest not found")
    )
)]
pub async fn update_guest(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(guest): Json<UpdateGuest>,
) -> AppResult<Json<Guest>> {
    let updated = state.services.guests.update(id, guest).await?;
    Ok(Json(updated))
}

/// Soft-archive a guest
#[utoipa::path(
    post,
    path = "/guests/{id}/archive",
    tag = "guests",
    params(
        ("id" = i32, Path, description = "Guest ID")
    ),
    responses(
        (status = 200, description = "Guest archived", body = Guest),
        (status = 404, description = "Guest not found"),
        (status = 422, description = "Guest has active reservations")
    )
)]
pub async fn archive_guest(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Guest>> {
    let archived = state.services.guests.archive(id).await?;
    Ok(Json(archived))
}
