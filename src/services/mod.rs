//! Business logic services

pub mod front_desk;
pub mod guests;
pub mod reservations;
pub mod rooms;
pub mod stats;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub rooms: rooms::RoomsService,
    pub guests: guests::GuestsService,
    pub reservations: reservations::ReservationsService,
    pub front_desk: front_desk::FrontDeskService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            rooms: rooms::RoomsService::new(repository.clone()),
            guests: guests::GuestsService::new(repository.clone()),
            reservations: reservations::ReservationsService::new(repository.clone()),
            front_desk: front_desk::FrontDeskService::new(repository.clone()),
            stats: stats::StatsService::new(repository),
        }
    }
}
