//! API handlers for the front-desk REST endpoints

pub mod front_desk;
pub mod guests;
pub mod health;
pub mod openapi;
pub mod reservations;
pub mod rooms;
pub mod stats;
