use crate::domain::error::DomainError;
use crate::domain::user::User;
use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::error;

/// Data access for user rows. Methods run on a caller-supplied connection
/// so the transaction boundary stays with the caller: `create` stages the
/// insert inside the caller's transaction and never commits it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, conn: &mut PgConnection, user: User) -> Result<User, DomainError>;
    async fn find_by_email(
        &self,
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<User>, DomainError>;
}

#[derive(Clone)]
pub struct PostgresUserRepository;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn create(&self, conn: &mut PgConnection, user: User) -> Result<User, DomainError> {
        // RETURNING makes the generated id visible within the transaction
        // without committing it.
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, name, surname, email, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING user_id, name, surname, email, is_active
            "#,
        )
        .bind(user.user_id)
        .bind(&user.name)
        .bind(&user.surname)
        .bind(&user.email)
        .bind(user.is_active)
        .fetch_one(conn)
        .await
        .map_err(|e| {
            error!("failed to create user: {}", e);
            DomainError::Internal(format!("database error: {}", e))
        })
    }

    async fn find_by_email(
        &self,
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Option<User>, DomainError> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, name, surname, email, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(conn)
        .await
        .map_err(|e| {
            error!("failed to find user by email {}: {}", email, e);
            DomainError::Internal(format!("database error: {}", e))
        })
    }
}
