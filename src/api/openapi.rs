//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{front_desk, guests, health, reservations, rooms, stats};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Front Desk API",
        version = "0.3.0",
        description = "Hotel front-desk administration REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::archive_room,
        rooms::mark_room_clean,
        // Guests
        guests::list_guests,
        guests::get_guest,
        guests::create_guest,
        guests::update_guest,
        guests::archive_guest,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::cancel_reservation,
        reservations::mark_no_show,
        // Front desk
        front_desk::arrivals,
        front_desk::departures,
        front_desk::check_in,
        front_desk::check_out,
        // Stats
        stats::get_stats,
    ),
    components(
        schemas(
            // Rooms
            crate::models::room::Room,
            crate::models::room::RoomType,
            crate::models::room::RoomStatus,
            crate::models::room::CreateRoom,
            crate::models::room::UpdateRoom,
            // Guests
            crate::models::guest::Guest,
            crate::models::guest::CreateGuest,
            crate::models::guest::UpdateGuest,
            // Reservations
            crate::models::reservation::Reservation,
            crate::models::reservation::ReservationDetails,
            crate::models::reservation::ReservationStatus,
            crate::models::reservation::CreateReservation,
            // Stats
            stats::StatsResponse,
            stats::RoomStats,
            stats::ReservationStats,
            stats::TodayStats,
            stats::StatEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health"),
        (name = "rooms", description = "Room registry"),
        (name = "guests", description = "Guest registry"),
        (name = "reservations", description = "Reservation ledger"),
        (name = "front-desk", description = "Daily check-in/check-out operations"),
        (name = "stats", description = "Occupancy statistics"),
    )
)]
pub struct ApiDoc;

/// Create a router serving the Swagger UI and the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
