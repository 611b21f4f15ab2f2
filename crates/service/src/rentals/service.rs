use std::sync::Arc;

use tracing::instrument;

use super::domain::RentalDetail;
use super::repository::RentalRepository;
use crate::errors::ServiceError;

pub struct RentalService<R: RentalRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: RentalRepository + ?Sized> RentalService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Store a confirmation as submitted; no field is required.
    ///
    /// # Examples
    /// ```
    /// use service::rentals::{RentalDetail, RentalService, repository::memory::InMemoryRentalRepository};
    /// use std::sync::Arc;
    /// let svc = RentalService::new(Arc::new(InMemoryRentalRepository::new()));
    /// let saved = tokio_test::block_on(svc.save_rental(RentalDetail::default())).unwrap();
    /// assert_eq!(saved.id, Some(1));
    /// ```
    #[instrument(skip(self, detail), fields(rental_id = ?detail.id))]
    pub async fn save_rental(&self, detail: RentalDetail) -> Result<RentalDetail, ServiceError> {
        self.repo.save(detail).await
    }

    pub async fn get_all_rentals(&self) -> Result<Vec<RentalDetail>, ServiceError> {
        self.repo.list_all().await
    }
}
