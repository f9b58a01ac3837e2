use crate::errors::ApiResult;
use crate::middleware::check_access::CurrentAdmin;
use crate::model::admin::{AdminSession, MeResponse};
use crate::model::blog::{
    BlogPost, BlogPostBrief, BlogPostMutation, CreateBlogPostRequest, UpdateBlogPostRequest,
};
use crate::model::project::{
    CreateProjectRequest, Project, ProjectBrief, ProjectMutation, UpdateProjectRequest,
};
use crate::model::tech::{
    CreateTechItemRequest, TechBrief, TechItem, TechMutation, UpdateTechItemRequest,
};
use crate::model::StatusMessage;
use crate::util::common::Pipe;
use crate::util::extractor::{Json, Path};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

// All handlers here run behind the access-check layer; `CurrentAdmin` is
// guaranteed to be present where it is extracted.

pub async fn create_project(
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<ProjectMutation>)> {
    let project = Project::create(&state.db, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProjectMutation {
            message: "Project created successfully".to_string(),
            project: ProjectBrief {
                id: project.id,
                title: project.title,
            },
        }),
    ))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateProjectRequest>,
) -> ApiResult<Json<ProjectMutation>> {
    let project = Project::update(&state.db, id, &payload).await?;

    Json(ProjectMutation {
        message: "Project updated successfully".to_string(),
        project: ProjectBrief {
            id: project.id,
            title: project.title,
        },
    })
    .pipe(Ok)
}

pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusMessage>> {
    Project::delete(&state.db, id).await?;
    Ok(Json(StatusMessage::new("Project deleted successfully")))
}

pub async fn create_tech_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateTechItemRequest>,
) -> ApiResult<(StatusCode, Json<TechMutation>)> {
    let tech = TechItem::create(&state.db, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(TechMutation {
            message: "Tech stack created successfully".to_string(),
            tech: TechBrief {
                id: tech.id,
                name: tech.name,
            },
        }),
    ))
}

pub async fn update_tech_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTechItemRequest>,
) -> ApiResult<Json<TechMutation>> {
    let tech = TechItem::update(&state.db, id, &payload).await?;

    Json(TechMutation {
        message: "Tech stack updated successfully".to_string(),
        tech: TechBrief {
            id: tech.id,
            name: tech.name,
        },
    })
    .pipe(Ok)
}

pub async fn delete_tech_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusMessage>> {
    TechItem::delete(&state.db, id).await?;
    Ok(Json(StatusMessage::new("Tech stack deleted successfully")))
}

pub async fn create_blog_post(
    State(state): State<AppState>,
    Json(payload): Json<CreateBlogPostRequest>,
) -> ApiResult<(StatusCode, Json<BlogPostMutation>)> {
    let post = BlogPost::create(&state.db, &payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(BlogPostMutation {
            message: "Blog post created successfully".to_string(),
            post: BlogPostBrief {
                id: post.id,
                title: post.title,
                slug: post.slug,
            },
        }),
    ))
}

pub async fn update_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateBlogPostRequest>,
) -> ApiResult<Json<BlogPostMutation>> {
    let post = BlogPost::update(&state.db, id, &payload).await?;

    Json(BlogPostMutation {
        message: "Blog post updated successfully".to_string(),
        post: BlogPostBrief {
            id: post.id,
            title: post.title,
            slug: post.slug,
        },
    })
    .pipe(Ok)
}

pub async fn delete_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<StatusMessage>> {
    BlogPost::delete(&state.db, id).await?;
    Ok(Json(StatusMessage::new("Blog post deleted successfully")))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(current): Extension<CurrentAdmin>,
) -> ApiResult<Json<StatusMessage>> {
    AdminSession::delete(&state.db, &current.session_id).await?;
    Ok(Json(StatusMessage::new("Logout successful")))
}

pub async fn me(Extension(current): Extension<CurrentAdmin>) -> Json<MeResponse> {
    Json(MeResponse {
        admin: current.admin,
    })
}
