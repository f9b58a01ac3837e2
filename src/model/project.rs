use crate::util::maybe::MaybeAbsent;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

// Tag lists live in TEXT columns as JSON arrays; `Json<Vec<String>>`
// decodes them on read and serializes transparently on the wire.
#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub tags: Json<Vec<String>>,
    pub primary_tags: Json<Vec<String>>,
    pub demo_url: String,
    pub github_url: String,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
    pub primary_tags: Vec<String>,
    pub demo_url: String,
    pub github_url: String,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    #[serde(default)]
    pub title: MaybeAbsent<String>,
    #[serde(default)]
    pub description: MaybeAbsent<String>,
    #[serde(default)]
    pub image: MaybeAbsent<String>,
    #[serde(default)]
    pub category: MaybeAbsent<String>,
    #[serde(default)]
    pub tags: MaybeAbsent<Vec<String>>,
    #[serde(default)]
    pub primary_tags: MaybeAbsent<Vec<String>>,
    #[serde(default)]
    pub demo_url: MaybeAbsent<String>,
    #[serde(default)]
    pub github_url: MaybeAbsent<String>,
    #[serde(default)]
    pub is_active: MaybeAbsent<bool>,
    #[serde(default)]
    pub sort_order: MaybeAbsent<i64>,
}

impl UpdateProjectRequest {
    pub fn is_empty(&self) -> bool {
        self.title.is_absent()
            && self.description.is_absent()
            && self.image.is_absent()
            && self.category.is_absent()
            && self.tags.is_absent()
            && self.primary_tags.is_absent()
            && self.demo_url.is_absent()
            && self.github_url.is_absent()
            && self.is_active.is_absent()
            && self.sort_order.is_absent()
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectBrief {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct ProjectMutation {
    pub message: String,
    pub project: ProjectBrief,
}
