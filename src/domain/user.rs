use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub is_active: bool,
}

impl User {
    /// Builds a new user with a freshly generated id and the active flag set.
    pub fn new(name: String, surname: String, email: String) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            name,
            surname,
            email,
            is_active: true,
        }
    }
}
