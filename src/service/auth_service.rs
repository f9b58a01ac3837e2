use crate::errors::ApiResult;
use crate::model::admin::{Admin, AdminSession, CreateAdminRequest};
use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

impl Admin {
    pub async fn create(
        pool: &SqlitePool,
        admin: &CreateAdminRequest,
        bcrypt_cost: u32,
    ) -> ApiResult<Admin> {
        let hashed = bcrypt::hash(&admin.password, bcrypt_cost)?;
        let now = Utc::now().timestamp_millis();
        let is_active = admin.is_active.unwrap_or(true);

        let row = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (username, password, email, is_active, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&admin.username)
        .bind(hashed)
        .bind(&admin.email)
        .bind(is_active)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn find_by_username(pool: &SqlitePool, username: &str) -> ApiResult<Option<Admin>> {
        Ok(
            sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE username = ?")
                .bind(username)
                .fetch_optional(pool)
                .await?,
        )
    }

    /// Checks a credential pair. Unknown usernames, deactivated admins and
    /// wrong passwords all collapse into `None` so the caller cannot tell
    /// them apart.
    pub async fn verify_password(
        pool: &SqlitePool,
        username: &str,
        password: &str,
    ) -> ApiResult<Option<Admin>> {
        let Some(admin) = Self::find_by_username(pool, username).await? else {
            return Ok(None);
        };

        if !admin.is_active {
            return Ok(None);
        }

        // An unparseable stored hash counts as a mismatch, not a server error.
        if bcrypt::verify(password, &admin.password).unwrap_or(false) {
            Ok(Some(admin))
        } else {
            Ok(None)
        }
    }
}

impl AdminSession {
    pub async fn create(
        pool: &SqlitePool,
        admin_id: i64,
        ttl_hours: i64,
    ) -> ApiResult<AdminSession> {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now().timestamp_millis();
        let expires_at = now + ttl_hours * 60 * 60 * 1000;

        let row = sqlx::query_as::<_, AdminSession>(
            r#"
            INSERT INTO admin_sessions (id, admin_id, expires_at, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&id)
        .bind(admin_id)
        .bind(expires_at)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    /// Resolves a bearer token to its admin. Expiry is checked in the query,
    /// so a stale row behaves exactly like a missing one.
    pub async fn find_valid(pool: &SqlitePool, session_id: &str) -> ApiResult<Option<Admin>> {
        let now = Utc::now().timestamp_millis();

        Ok(sqlx::query_as::<_, Admin>(
            r#"
            SELECT a.*
            FROM admin_sessions s
            INNER JOIN admins a ON a.id = s.admin_id
            WHERE s.id = ? AND s.expires_at > ?
            "#,
        )
        .bind(session_id)
        .bind(now)
        .fetch_optional(pool)
        .await?)
    }

    /// Idempotent; logging out twice is fine.
    pub async fn delete(pool: &SqlitePool, session_id: &str) -> ApiResult<()> {
        sqlx::query("DELETE FROM admin_sessions WHERE id = ?")
            .bind(session_id)
            .execute(pool)
            .await?;

        Ok(())
    }
}
