use async_trait::async_trait;

use super::domain::User;
use crate::errors::ServiceError;

/// Persistence abstraction for user records.
///
/// Email lookups match exactly. Several records may share an email; lookups
/// then return the one saved most recently, whether by insert or overwrite.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert when `user.id` is `None`, otherwise overwrite the record with
    /// that id. Returns the stored record.
    async fn save(&self, user: User) -> Result<User, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;
    async fn find_by_email_and_password(&self, email: &str, password: &str) -> Result<Option<User>, ServiceError>;
    /// Every record, in identifier order.
    async fn list_all(&self) -> Result<Vec<User>, ServiceError>;
}

/// In-memory repository for tests, doc examples and the `memory` storage backend.
pub mod memory {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, PoisonError};

    struct Row {
        seq: u64,
        user: User,
    }

    #[derive(Default)]
    struct Table {
        rows: BTreeMap<i32, Row>,
        last_id: i32,
        last_seq: u64,
    }

    #[derive(Default)]
    pub struct InMemoryUserRepository {
        table: Mutex<Table>,
    }

    impl InMemoryUserRepository {
        pub fn new() -> Self {
            Self::default()
        }

        fn find_where(&self, pred: impl Fn(&User) -> bool) -> Option<User> {
            let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            table
                .rows
                .values()
                .filter(|row| pred(&row.user))
                .max_by_key(|row| row.seq)
                .map(|row| row.user.clone())
        }
    }

    #[async_trait]
    impl UserRepository for InMemoryUserRepository {
        async fn save(&self, user: User) -> Result<User, ServiceError> {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            let id = match user.id {
                Some(id) if table.rows.contains_key(&id) => id,
                Some(id) => return Err(ServiceError::not_found(&format!("user {id}"))),
                None => {
                    table.last_id += 1;
                    table.last_id
                }
            };
            table.last_seq += 1;
            let seq = table.last_seq;
            let stored = User { id: Some(id), ..user };
            table.rows.insert(id, Row { seq, user: stored.clone() });
            Ok(stored)
        }

        async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
            Ok(self.find_where(|u| u.email == email))
        }

        async fn find_by_email_and_password(&self, email: &str, password: &str) -> Result<Option<User>, ServiceError> {
            Ok(self.find_where(|u| u.email == email && u.password == password))
        }

        async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
            let table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            Ok(table.rows.values().map(|row| row.user.clone()).collect())
        }
    }
}
