use async_trait::async_trait;

use super::domain::RentalDetail;
use crate::errors::ServiceError;

#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Insert when `detail.id` is `None`, otherwise overwrite that record.
    async fn save(&self, detail: RentalDetail) -> Result<RentalDetail, ServiceError>;
    async fn list_all(&self) -> Result<Vec<RentalDetail>, ServiceError>;
}

pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, PoisonError};

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, RentalDetail>,
        last_id: i32,
    }

    #[derive(Default)]
    pub struct InMemoryRentalRepository {
        table: Mutex<Table>,
    }

    impl InMemoryRentalRepository {
        pub fn new() -> Self {
            Self::default()
        }
    }

    #[async_trait]
    impl RentalRepository for InMemoryRentalRepository {
        async fn save(&self, detail: RentalDetail) -> Result<RentalDetail, ServiceError> {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            let id = match detail.id {
                Some(id) if table.rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::not_found(&format!("rental detail {id}"))),
                None => {
                    table.last_id += 1;
                    table.last_id
                }
            };
            let stored = RentalDetail { id: Some(id), ..detail };
            table.rows.insert(id, stored.clone());
            Ok(stored)
        }

        async fn list_all(&self) -> Result<Vec<RentalDetail>, ServiceError> {
            let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(table.rows.values().cloned().collect())
        }
    }
}
