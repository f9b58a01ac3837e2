use crate::errors::ApiResult;
use crate::model::user::{CreateUserRequest, User};
use sqlx::SqlitePool;

// Legacy storage operations; no route reaches these. Passwords here are
// stored as-is, which is why the admin tables replaced this entity.
impl User {
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> ApiResult<Option<User>> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?,
        )
    }

    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> ApiResult<Option<User>> {
        Ok(
            sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = ?")
                .bind(username)
                .fetch_optional(pool)
                .await?,
        )
    }

    pub async fn create(pool: &SqlitePool, user: &CreateUserRequest) -> ApiResult<User> {
        Ok(sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password)
            VALUES (?, ?)
            RETURNING *
            "#,
        )
        .bind(&user.username)
        .bind(&user.password)
        .fetch_one(pool)
        .await?)
    }
}
