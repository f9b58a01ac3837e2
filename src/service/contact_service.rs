use crate::errors::ApiResult;
use crate::model::contact::{Contact, CreateContactRequest};
use chrono::Utc;
use sqlx::SqlitePool;

impl Contact {
    pub async fn create(pool: &SqlitePool, contact: &CreateContactRequest) -> ApiResult<Contact> {
        let now = Utc::now().timestamp_millis();

        let row = sqlx::query_as::<_, Contact>(
            r#"
            INSERT INTO contacts (name, email, subject, message, created_at)
            VALUES (?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.subject)
        .bind(&contact.message)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn all(pool: &SqlitePool) -> ApiResult<Vec<Contact>> {
        Ok(
            sqlx::query_as::<_, Contact>("SELECT * FROM contacts ORDER BY created_at")
                .fetch_all(pool)
                .await?,
        )
    }
}
