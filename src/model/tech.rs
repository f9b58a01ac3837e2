use crate::util::maybe::MaybeAbsent;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One entry of the "technologies I work with" grid.
#[derive(Debug, Serialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TechItem {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub bg: String,
    pub description: String,
    // frontend, backend, database, tools
    pub category: String,
    pub is_active: bool,
    pub sort_order: i64,
    pub created_at: i64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTechItemRequest {
    pub name: String,
    pub icon: String,
    pub bg: String,
    pub description: String,
    pub category: String,
    pub is_active: Option<bool>,
    pub sort_order: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTechItemRequest {
    #[serde(default)]
    pub name: MaybeAbsent<String>,
    #[serde(default)]
    pub icon: MaybeAbsent<String>,
    #[serde(default)]
    pub bg: MaybeAbsent<String>,
    #[serde(default)]
    pub description: MaybeAbsent<String>,
    #[serde(default)]
    pub category: MaybeAbsent<String>,
    #[serde(default)]
    pub is_active: MaybeAbsent<bool>,
    #[serde(default)]
    pub sort_order: MaybeAbsent<i64>,
}

impl UpdateTechItemRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_absent()
            && self.icon.is_absent()
            && self.bg.is_absent()
            && self.description.is_absent()
            && self.category.is_absent()
            && self.is_active.is_absent()
            && self.sort_order.is_absent()
    }
}

#[derive(Debug, Serialize)]
pub struct TechBrief {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TechMutation {
    pub message: String,
    pub tech: TechBrief,
}
