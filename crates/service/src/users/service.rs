use std::sync::Arc;

use tracing::{debug, instrument};

use super::domain::User;
use super::repository::UserRepository;
use crate::errors::ServiceError;

/// User operations independent of the web framework.
///
/// Every call forwards to the repository unchanged; deciding what a missing
/// record means is left to the caller.
pub struct UserService<R: UserRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a user, inserting or overwriting by identifier.
    ///
    /// # Examples
    /// ```
    /// use service::users::{User, UserService, repository::memory::InMemoryUserRepository};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(InMemoryUserRepository::new()));
    /// let input = User { name: "A".into(), email: "a@x.com".into(), password: "p1".into(), ..User::default() };
    /// let saved = tokio_test::block_on(svc.save_user(input)).unwrap();
    /// assert_eq!(saved.id, Some(1));
    /// ```
    #[instrument(skip(self, user), fields(user_id = ?user.id, email = %user.email))]
    pub async fn save_user(&self, user: User) -> Result<User, ServiceError> {
        let saved = self.repo.save(user).await?;
        debug!(user_id = ?saved.id, "user_saved");
        Ok(saved)
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ServiceError> {
        self.repo.list_all().await
    }

    /// Look up a user by exact email and password.
    ///
    /// # Examples
    /// ```
    /// use service::users::{User, UserService, repository::memory::InMemoryUserRepository};
    /// use std::sync::Arc;
    /// let svc = UserService::new(Arc::new(InMemoryUserRepository::new()));
    /// let input = User { name: "A".into(), email: "a@x.com".into(), password: "p1".into(), ..User::default() };
    /// tokio_test::block_on(svc.save_user(input)).unwrap();
    /// assert!(tokio_test::block_on(svc.find_user("a@x.com", "p1")).unwrap().is_some());
    /// assert!(tokio_test::block_on(svc.find_user("a@x.com", "wrong")).unwrap().is_none());
    /// ```
    #[instrument(skip(self, password))]
    pub async fn find_user(&self, email: &str, password: &str) -> Result<Option<User>, ServiceError> {
        self.repo.find_by_email_and_password(email, password).await
    }

    #[instrument(skip(self))]
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        self.repo.find_by_email(email).await
    }
}
