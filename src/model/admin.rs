use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i64,
    pub username: String,
    // bcrypt hash, never serialized
    #[serde(skip_serializing)]
    pub password: String,
    pub email: String,
    pub is_active: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

/// The only admin shape that crosses the wire.
#[derive(Debug, Serialize, Clone)]
pub struct AdminPublic {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<Admin> for AdminPublic {
    fn from(admin: Admin) -> Self {
        AdminPublic {
            id: admin.id,
            username: admin.username,
            email: admin.email,
        }
    }
}

#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub id: String,
    pub admin_id: i64,
    pub expires_at: i64,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateAdminRequest {
    pub username: String,
    pub password: String,
    pub email: String,
    pub is_active: Option<bool>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username and password required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Username and password required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub session_token: String,
    pub admin: AdminPublic,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub admin: AdminPublic,
}
