use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// Legacy credential entity. No route reaches it; kept because earlier
// deployments created the table and the storage layer still owns it.
#[derive(Debug, Serialize, FromRow, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}
