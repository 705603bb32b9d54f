use std::sync::Arc;

use sqlx::PgPool;
use tracing::instrument;

use crate::data::user_repository::UserRepository;
use crate::domain::{error::DomainError, user::User};

#[derive(Clone)]
pub struct UserService<R: UserRepository + 'static> {
    pool: PgPool,
    repo: Arc<R>,
}

impl<R> UserService<R>
where
    R: UserRepository + 'static,
{
    pub fn new(pool: PgPool, repo: Arc<R>) -> Self {
        Self { pool, repo }
    }

    /// Creates a user inside a request-scoped transaction: commit on
    /// success, rollback when the transaction is dropped on any error path.
    #[instrument(skip(self))]
    pub async fn create_user(
        &self,
        name: String,
        surname: String,
        email: String,
    ) -> Result<User, DomainError> {
        let mut tx = self.pool.begin().await?;
        let user = self
            .repo
            .create(&mut *tx, User::new(name, surname, email))
            .await?;
        tx.commit().await?;
        Ok(user)
    }
}
