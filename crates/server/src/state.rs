use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::rentals::{
    repo::seaorm::SeaOrmRentalRepository, repository::memory::InMemoryRentalRepository, RentalRepository,
    RentalService,
};
use service::users::{
    repo::seaorm::SeaOrmUserRepository, repository::memory::InMemoryUserRepository, UserRepository, UserService,
};

/// Shared handler state. Services sit behind trait objects so the router is
/// the same whichever store backs it.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService<dyn UserRepository>>,
    pub rentals: Arc<RentalService<dyn RentalRepository>>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, rentals: Arc<dyn RentalRepository>) -> Self {
        Self {
            users: Arc::new(UserService::new(users)),
            rentals: Arc::new(RentalService::new(rentals)),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserRepository::new()), Arc::new(InMemoryRentalRepository::new()))
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmUserRepository::new(db.clone())),
            Arc::new(SeaOrmRentalRepository::new(db)),
        )
    }
}
