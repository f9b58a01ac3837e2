use crate::errors::{ApiError, ApiResult};
use crate::model::blog::{BlogPost, CreateBlogPostRequest, UpdateBlogPostRequest};
use chrono::Utc;
use sqlx::types::Json;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

impl BlogPost {
    pub async fn published(pool: &SqlitePool) -> ApiResult<Vec<BlogPost>> {
        Ok(sqlx::query_as::<_, BlogPost>(
            "SELECT * FROM blog_posts WHERE is_published = TRUE ORDER BY published_at DESC",
        )
        .fetch_all(pool)
        .await?)
    }

    // Unpublished posts stay reachable by id; only the list is gated.
    pub async fn find_by_id(pool: &SqlitePool, id: i64) -> ApiResult<Option<BlogPost>> {
        Ok(
            sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?,
        )
    }

    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> ApiResult<Option<BlogPost>> {
        Ok(
            sqlx::query_as::<_, BlogPost>("SELECT * FROM blog_posts WHERE slug = ?")
                .bind(slug)
                .fetch_optional(pool)
                .await?,
        )
    }

    pub async fn create(pool: &SqlitePool, post: &CreateBlogPostRequest) -> ApiResult<BlogPost> {
        let now = Utc::now().timestamp_millis();
        let tags = post.tags.clone().unwrap_or_default();
        let is_published = post.is_published.unwrap_or(true);
        // A post created without an explicit publication time counts as
        // published right now, matching the list ordering.
        let published_at = post.published_at.or(Some(now));

        let row = sqlx::query_as::<_, BlogPost>(
            r#"
            INSERT INTO blog_posts (
                title, slug, content, excerpt, featured_image, tags,
                category, is_published, published_at, created_at, updated_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#,
        )
        .bind(&post.title)
        .bind(&post.slug)
        .bind(&post.content)
        .bind(&post.excerpt)
        .bind(&post.featured_image)
        .bind(Json(tags))
        .bind(&post.category)
        .bind(is_published)
        .bind(published_at)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(row)
    }

    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        patch: &UpdateBlogPostRequest,
    ) -> ApiResult<BlogPost> {
        let now = Utc::now().timestamp_millis();

        let mut builder = QueryBuilder::<Sqlite>::new("UPDATE blog_posts SET ");

        builder.push("updated_at = ").push_bind(now);

        patch.title.if_present(|title| {
            builder.push(", ");
            builder.push("title = ").push_bind(title);
        });

        patch.slug.if_present(|slug| {
            builder.push(", ");
            builder.push("slug = ").push_bind(slug);
        });

        patch.content.if_present(|content| {
            builder.push(", ");
            builder.push("content = ").push_bind(content);
        });

        patch.excerpt.if_present(|excerpt| {
            builder.push(", ");
            builder.push("excerpt = ").push_bind(excerpt);
        });

        patch.featured_image.if_present(|featured_image| {
            builder.push(", ");
            builder.push("featured_image = ").push_bind(featured_image);
        });

        patch.tags.if_present(|tags| {
            builder.push(", ");
            builder.push("tags = ").push_bind(Json(tags));
        });

        patch.category.if_present(|category| {
            builder.push(", ");
            builder.push("category = ").push_bind(category);
        });

        patch.is_published.if_present(|is_published| {
            builder.push(", ");
            builder.push("is_published = ").push_bind(is_published);
        });

        patch.published_at.if_present(|published_at| {
            builder.push(", ");
            builder.push("published_at = ").push_bind(published_at);
        });

        builder.push(" WHERE id = ").push_bind(id);
        builder.push(" RETURNING *");

        builder
            .build_query_as::<BlogPost>()
            .fetch_optional(pool)
            .await?
            .ok_or(blog_post_not_found())
    }

    pub async fn delete(pool: &SqlitePool, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }
}

fn blog_post_not_found() -> ApiError {
    ApiError::NotFound("Blog post not found".to_owned())
}
