use crate::errors::{not_found, unauthorized, ApiResult};
use crate::model::admin::{Admin, AdminSession, CreateAdminRequest, LoginRequest, LoginResponse};
use crate::model::blog::BlogPost;
use crate::model::contact::{Contact, ContactCreated, ContactEcho, CreateContactRequest};
use crate::model::project::Project;
use crate::model::tech::TechItem;
use crate::model::StatusMessage;
use crate::util::common::Pipe;
use crate::util::extractor::{Json, Path, ValidatedJson};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

pub async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateContactRequest>,
) -> ApiResult<(StatusCode, Json<ContactCreated>)> {
    let contact = Contact::create(&state.db, &payload).await?;

    // No outbound mail is sent; the submission only lands in the table.
    info!("new contact form submission from {}", contact.email);

    Ok((
        StatusCode::CREATED,
        Json(ContactCreated {
            message: "Thank you! Your message has been sent successfully. I'll get back to you soon."
                .to_string(),
            contact: ContactEcho {
                id: contact.id,
                name: contact.name,
                email: contact.email,
                subject: contact.subject,
            },
        }),
    ))
}

pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = Contact::all(&state.db).await?;
    Ok(Json(contacts))
}

pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    let projects = Project::all_active(&state.db).await?;
    Ok(Json(projects))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Project>> {
    let project = Project::find_by_id(&state.db, id)
        .await?
        .ok_or(not_found("Project not found"))?;
    Ok(Json(project))
}

pub async fn list_tech_stack(State(state): State<AppState>) -> ApiResult<Json<Vec<TechItem>>> {
    let tech = TechItem::all_active(&state.db).await?;
    Ok(Json(tech))
}

pub async fn get_tech_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<TechItem>> {
    let tech = TechItem::find_by_id(&state.db, id)
        .await?
        .ok_or(not_found("Tech stack item not found"))?;
    Ok(Json(tech))
}

pub async fn list_blog_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<BlogPost>>> {
    let posts = BlogPost::published(&state.db).await?;
    Ok(Json(posts))
}

pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<BlogPost>> {
    let post = BlogPost::find_by_id(&state.db, id)
        .await?
        .ok_or(not_found("Blog post not found"))?;
    Ok(Json(post))
}

pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let admin = Admin::verify_password(&state.db, &payload.username, &payload.password)
        .await?
        .ok_or(unauthorized("Invalid credentials"))?;

    let session =
        AdminSession::create(&state.db, admin.id, state.config.auth.session_ttl_hours).await?;

    Json(LoginResponse {
        message: "Login successful".to_string(),
        session_token: session.id,
        admin: admin.into(),
    })
    .pipe(Ok)
}

/// Bootstrap endpoint: makes sure an `admin` account exists. Safe to call
/// repeatedly; the well-known password is expected to be rotated after the
/// first login.
pub async fn create_default_admin(
    State(state): State<AppState>,
) -> ApiResult<Json<StatusMessage>> {
    if Admin::find_by_username(&state.db, "admin").await?.is_some() {
        return Ok(Json(StatusMessage::new("Default admin already exists")));
    }

    Admin::create(
        &state.db,
        &CreateAdminRequest {
            username: "admin".to_string(),
            password: "password".to_string(),
            email: "admin@example.com".to_string(),
            is_active: Some(true),
        },
        state.config.auth.bcrypt_cost,
    )
    .await?;

    Ok(Json(StatusMessage::new("Default admin created successfully")))
}
