use crate::errors::{ApiError, ApiResult};
use crate::model::project::{CreateProjectRequest, Project, UpdateProjectRequest};
use chrono::Utc;
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

impl Project {
    /// Rows shown on the public site, in curated order.
    pub async fn all_active(pool: &SqlitePool) -> ApiResult<Vec<Project>> {
        Ok(sqlx::query_as::<_, Project>(
            "SELECT * FROM projects WHERE is_active = TRUE ORDER BY sort_order",
        )
        .fetch_all(pool)
        .await?)
    }

    // Lookup by id is deliberately not gated on is_active: deactivating a
    // project hides it from the list but direct links keep working.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> ApiResult<Option<Project>> {
        Ok(
            sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?,
        )
    }

    pub async fn create(pool: &SqlitePool, project: &CreateProjectRequest) -> ApiResult<Project> {
        let now = Utc::now().timestamp_millis();
        let is_active = project.is_active.unwrap_or(true);
        let sort_order = project.sort_order.unwrap_or(0);

        let row = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, description, image, category, tags, primary_tags,
                demo_url, github_url, is_active, sort_order, created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.category)
        .bind(Json(&project.tags))
        .bind(Json(&project.primary_tags))
        .bind(&project.demo_url)
        .bind(&project.github_url)
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
        patch: &UpdateProjectRequest,
    ) -> ApiResult<Project> {
        // An all-absent body is a no-op; report the current row.
        if patch.is_empty() {
            return Self::find_by_id(pool, id)
                .await?
                .ok_or(project_not_found());
        }

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE projects SET ");
        let mut sets = builder.separated(", ");

        patch.title.if_present(|title| {
            sets.push("title = ").push_bind_unseparated(title);
        });

        patch.description.if_present(|description| {
            sets.push("description = ").push_bind_unseparated(description);
        });

        patch.image.if_present(|image| {
            sets.push("image = ").push_bind_unseparated(image);
        });

        patch.category.if_present(|category| {
            sets.push("category = ").push_bind_unseparated(category);
        });

        patch.tags.if_present(|tags| {
            sets.push("tags = ").push_bind_unseparated(Json(tags));
        });

        patch.primary_tags.if_present(|primary_tags| {
            sets.push("primary_tags = ")
                .push_bind_unseparated(Json(primary_tags));
        });

        patch.demo_url.if_present(|demo_url| {
            sets.push("demo_url = ").push_bind_unseparated(demo_url);
        });

        patch.github_url.if_present(|github_url| {
            sets.push("github_url = ").push_bind_unseparated(github_url);
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
            .build_query_as::<Project>()
            .fetch_optional(pool)
            .await?
            .ok_or(project_not_found())
    }

    /// Unconditional; deleting an id that is already gone is not an error.
    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

fn project_not_found() -> ApiError {
    ApiError::NotFound("Project not found".to_owned())
}
