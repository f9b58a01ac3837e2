use crate::errors::{ApiError, ApiResult};
use crate::model::tech::{CreateTechItemRequest, TechItem, UpdateTechItemRequest};
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

impl TechItem {
    pub async fn all_active(pool: &SqlitePool) -> ApiResult<Vec<TechItem>> {
        Ok(sqlx::query_as::<_, TechItem>(
            "SELECT * FROM tech_stack WHERE is_active = TRUE ORDER BY sort_order",
        )
        .fetch_all(pool)
        .await?)
    }

    // Same visibility rule as projects: list is gated, direct lookup is not.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> ApiResult<Option<TechItem>> {
        Ok(
            sqlx::query_as::<_, TechItem>("SELECT * FROM tech_stack WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?,
        )
    }

    pub async fn create(pool: &SqlitePool, tech: &CreateTechItemRequest) -> ApiResult<TechItem> {
        let now = Utc::now().timestamp_millis();
        let is_active = tech.is_active.unwrap_or(true);
        let sort_order = tech.sort_order.unwrap_or(0);

        let row = sqlx::query_as::<_, TechItem>(
            r#"
            INSERT INTO tech_stack (name, icon, bg, description, category, is_active, sort_order, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&tech.name)
        .bind(&tech.icon)
        .bind(&tech.bg)
        .bind(&tech.description)
        .bind(&tech.category)
        .bind(is_active)
        .bind(sort_order)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &UpdateTechItemRequest,
    ) -> ApiResult<TechItem> {
        if patch.is_empty() {
            return Self::find_by_id(pool, id).await?.ok_or(tech_not_found());
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE tech_stack SET ");
        let mut sets = builder.separated(", ");

        patch.name.if_present(|name| {
            sets.push("name = ").push_bind_unseparated(name);
        });

        patch.icon.if_present(|icon| {
            sets.push("icon = ").push_bind_unseparated(icon);
        });

        patch.bg.if_present(|bg| {
            sets.push("bg = ").push_bind_unseparated(bg);
        });

        patch.description.if_present(|description| {
            sets.push("description = ").push_bind_unseparated(description);
        });

        patch.category.if_present(|category| {
            sets.push("category = ").push_bind_unseparated(category);
        });

        patch.is_active.if_present(|is_active| {
            sets.push("is_active = ").push_bind_unseparated(is_active);
        });

        patch.sort_order.if_present(|sort_order| {
            sets.push("sort_order = ").push_bind_unseparated(sort_order);
        });

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<TechItem>()
            .fetch_optional(pool)
            .await?
            .ok_or(tech_not_found())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM tech_stack WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

fn tech_not_found() -> ApiError {
    ApiError::NotFound("Tech stack item not found".to_owned())
}
