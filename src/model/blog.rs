use crate::util::maybe::MaybeAbsent;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub tags: Json<Vec<String>>,
    pub category: String,
    pub is_published: bool,
    pub published_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub featured_image: Option<String>,
    pub tags: Option<Vec<String>>,
    pub category: String,
    pub is_published: Option<bool>,
    pub published_at: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPostRequest {
    #[serde(default)]
    pub title: MaybeAbsent<String>,
    #[serde(default)]
    pub slug: MaybeAbsent<String>,
    #[serde(default)]
    pub content: MaybeAbsent<String>,
    #[serde(default)]
    pub excerpt: MaybeAbsent<String>,
    #[serde(default)]
    pub featured_image: MaybeAbsent<Option<String>>,
    #[serde(default)]
    pub tags: MaybeAbsent<Vec<String>>,
    #[serde(default)]
    pub category: MaybeAbsent<String>,
    #[serde(default)]
    pub is_published: MaybeAbsent<bool>,
    #[serde(default)]
    pub published_at: MaybeAbsent<Option<i64>>,
}

#[derive(Debug, Serialize)]
pub struct BlogPostBrief {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

#[derive(Debug, Serialize)]
pub struct BlogPostMutation {
    pub message: String,
    pub post: BlogPostBrief,
}
