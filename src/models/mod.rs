//! Data models for the front-desk server

pub mod guest;
pub mod reservation;
pub mod room;

// Re-export commonly used types
pub use guest::Guest;
pub use reservation::{Reservation, ReservationDetails, ReservationStatus};
pub use room::{Room, RoomStatus, RoomType};
